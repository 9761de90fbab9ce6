use std::collections::BTreeMap;

use stackdom::{
    resolve, valid_children, Align, BorderLine, Child, CloneElement, Direction, Display, Element,
    Justify, Length, NodeRef, Prop, Responsive, Selector, Style, Value, Wrap,
};

use crate::Component;

/// Two units on the theme spacing scale.
pub const DEFAULT_SPACING: Length = Length::Space(2.0);

/// Options shared by [`Stack`], [`HStack`] and [`VStack`].
#[derive(Debug, Clone)]
pub struct StackProps {
    pub direction: Responsive<Direction>,
    /// Shorthand for `direction: row`.
    pub is_inline: bool,
    pub align: Responsive<Align>,
    pub justify: Responsive<Justify>,
    pub wrap: Option<Responsive<Wrap>>,
    pub spacing: Responsive<Length>,
    /// Template cloned into every gap between two children.
    pub divider: Option<Element>,
    /// Wrap each child in an `inline-block` box before laying out.
    pub should_wrap_children: bool,
    /// Container style overrides, applied last.
    pub style: Style,
    pub attrs: BTreeMap<String, String>,
    pub node_ref: Option<NodeRef>,
    pub children: Vec<Child>,
}

impl Default for StackProps {
    fn default() -> Self {
        Self {
            direction: Responsive::Value(Direction::Column),
            is_inline: false,
            align: Responsive::Value(Align::Center),
            justify: Responsive::Value(Justify::FlexStart),
            wrap: None,
            spacing: Responsive::Value(DEFAULT_SPACING),
            divider: None,
            should_wrap_children: false,
            style: Style::new(),
            attrs: BTreeMap::new(),
            node_ref: None,
            children: Vec::new(),
        }
    }
}

impl StackProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: impl Into<Responsive<Direction>>) -> Self {
        self.direction = direction.into();
        self
    }

    pub fn is_inline(mut self, is_inline: bool) -> Self {
        self.is_inline = is_inline;
        self
    }

    pub fn align(mut self, align: impl Into<Responsive<Align>>) -> Self {
        self.align = align.into();
        self
    }

    pub fn justify(mut self, justify: impl Into<Responsive<Justify>>) -> Self {
        self.justify = justify.into();
        self
    }

    pub fn wrap(mut self, wrap: impl Into<Responsive<Wrap>>) -> Self {
        self.wrap = Some(wrap.into());
        self
    }

    pub fn spacing(mut self, spacing: impl Into<Responsive<Length>>) -> Self {
        self.spacing = spacing.into();
        self
    }

    pub fn divider(mut self, divider: Element) -> Self {
        self.divider = Some(divider);
        self
    }

    pub fn should_wrap_children(mut self, wrap: bool) -> Self {
        self.should_wrap_children = wrap;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style.merge(&style);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<C: Into<Child>>(mut self, children: impl IntoIterator<Item = C>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

/// Lay children out along one axis with uniform spacing, or with a
/// divider in every gap.
pub fn stack(props: StackProps) -> Element {
    let StackProps {
        direction,
        is_inline,
        align,
        justify,
        wrap,
        spacing,
        divider,
        should_wrap_children,
        style: overrides,
        attrs,
        node_ref,
        children,
    } = props;

    let direction = if is_inline {
        Responsive::Value(Direction::Row)
    } else {
        direction
    };
    // Logical direction to physical flex axis.
    let axis = resolve(&direction, |direction| match direction {
        Direction::Row => Direction::Row,
        Direction::Column => Direction::Column,
    });

    let mut children = valid_children(children);
    if should_wrap_children {
        children = children
            .into_iter()
            .enumerate()
            .map(|(index, child)| {
                let key = item_key(index, child.key.as_deref());
                Element::box_()
                    .key(key)
                    .with_style(Prop::Display, Display::InlineBlock)
                    .child(child)
            })
            .collect();
    } else if divider.is_some() {
        children = children
            .into_iter()
            .enumerate()
            .map(|(index, mut child)| {
                child.key = Some(item_key(index, child.key.as_deref()));
                child
            })
            .collect();
    }

    log::trace!(
        "[stack] direction={:?} children={} divider={}",
        axis,
        children.len(),
        divider.is_some()
    );

    let mut style = Style::new()
        .set(Prop::Display, Display::Flex)
        .set_responsive(Prop::FlexDirection, axis.map(|d| Value::from(*d)))
        .set_responsive(Prop::AlignItems, align.map(|a| Value::from(*a)))
        .set_responsive(Prop::JustifyContent, justify.map(|j| Value::from(*j)));
    if let Some(wrap) = &wrap {
        style.insert(Prop::FlexWrap, wrap.map(|w| Value::from(*w)));
    }

    let content = match &divider {
        None => {
            style = style.nested(Selector::SiblingsAfterFirst, sibling_margin(&axis, &spacing));
            children
        }
        Some(divider) => interleave(children, divider, &divider_style(&axis, &spacing)),
    };
    style.merge(&overrides);

    let mut container = Element::flex().style(style).children(content);
    container.attrs = attrs;
    container.node_ref = node_ref;
    container
}

/// Horizontal stack: always `row`, whatever direction the caller passed.
pub fn hstack(props: StackProps) -> Element {
    stack(StackProps {
        direction: Responsive::Value(Direction::Row),
        ..props
    })
}

/// Vertical stack: always `column`, whatever direction the caller passed.
pub fn vstack(props: StackProps) -> Element {
    stack(StackProps {
        direction: Responsive::Value(Direction::Column),
        is_inline: false,
        ..props
    })
}

fn spacing_value(spacing: &Responsive<Length>) -> Responsive<Value> {
    spacing.map(|s| Value::from(*s))
}

/// Margin rule for every child after the first.
pub fn sibling_margin(axis: &Responsive<Direction>, spacing: &Responsive<Length>) -> Style {
    Style::from_responsive(resolve(axis, |direction| match direction {
        Direction::Column => Style::new()
            .set_responsive(Prop::MarginTop, spacing_value(spacing))
            .set(Prop::MarginLeft, Length::ZERO),
        Direction::Row => Style::new()
            .set_responsive(Prop::MarginLeft, spacing_value(spacing))
            .set(Prop::MarginTop, Length::ZERO),
    }))
}

/// Patch applied to every divider clone.
pub fn divider_style(axis: &Responsive<Direction>, spacing: &Responsive<Length>) -> Style {
    Style::from_responsive(resolve(axis, |direction| match direction {
        Direction::Row => Style::new()
            .set_responsive(Prop::MarginX, spacing_value(spacing))
            .set(Prop::MarginY, Length::ZERO)
            .set(Prop::BorderLeft, BorderLine::solid(1.0))
            .set(Prop::BorderBottom, Value::None)
            .set(Prop::Width, Length::Auto),
        Direction::Column => Style::new()
            .set_responsive(Prop::MarginY, spacing_value(spacing))
            .set(Prop::MarginX, Length::ZERO)
            .set(Prop::BorderLeft, Value::None)
            .set(Prop::BorderBottom, BorderLine::solid(1.0))
            .set(Prop::Width, Length::FULL),
    }))
}

/// `item-{index}`, or `item-{index}:{own}` for a caller-keyed child.
/// Unique among siblings and disjoint from `divider-{index}`.
fn item_key(index: usize, own: Option<&str>) -> String {
    match own {
        Some(own) => format!("item-{index}:{own}"),
        None => format!("item-{index}"),
    }
}

/// Children with a divider clone after every child but the last. Child
/// `n` arrives keyed `item-{n}` (see [`item_key`]); its divider gets
/// `divider-{n}`.
fn interleave(children: Vec<Element>, divider: &Element, patch: &Style) -> Vec<Element> {
    let last = children.len().saturating_sub(1);
    let mut out = Vec::with_capacity(children.len() * 2);

    for (index, child) in children.into_iter().enumerate() {
        out.push(child);
        if index != last {
            out.push(divider.clone_with(format!("divider-{index}"), patch));
        }
    }
    out
}

pub struct Stack;

impl Component for Stack {
    type Props = StackProps;

    fn render(props: StackProps) -> Element {
        stack(props)
    }
}

pub struct HStack;

impl Component for HStack {
    type Props = StackProps;

    fn render(props: StackProps) -> Element {
        hstack(props)
    }
}

pub struct VStack;

impl Component for VStack {
    type Props = StackProps;

    fn render(props: StackProps) -> Element {
        vstack(props)
    }
}
