use stackdom::{Align, Element, Length, Prop, Style, Value};

use crate::Component;

/// Default divider for a stack.
///
/// Carries no border of its own; the stack decides which side gets the
/// line per direction. Border color is inherited from the container.
pub fn stack_divider(overrides: Style) -> Element {
    let style = Style::new()
        .set(Prop::BorderLeft, Value::None)
        .set(Prop::BorderBottom, Value::None)
        .set(Prop::BorderColor, Value::keyword("inherit"))
        .set(Prop::AlignSelf, Align::Stretch)
        .set(Prop::Width, Length::Auto)
        .set(Prop::Height, Length::Auto)
        .merged(&overrides);

    Element::box_().style(style).attr("role", "separator")
}

pub struct StackDivider;

impl Component for StackDivider {
    type Props = Style;

    fn render(overrides: Style) -> Element {
        stack_divider(overrides)
    }
}
