//! Single-axis layout components over the `stackdom` element model.

mod divider;
mod stack;

pub use divider::{stack_divider, StackDivider};
pub use stack::{
    divider_style, hstack, sibling_margin, stack, vstack, HStack, Stack, StackProps, VStack,
    DEFAULT_SPACING,
};

/// A presentational component: a pure function from props to an element.
pub trait Component {
    type Props;

    fn render(props: Self::Props) -> stackdom::Element;
}

pub mod prelude {
    pub use crate::{
        hstack, stack, stack_divider, vstack, Component, HStack, Stack, StackDivider, StackProps,
        VStack,
    };
    pub use stackdom::{
        Align, Breakpoint, Child, Direction, Element, Justify, Length, NodeRef, Responsive, Style,
        Wrap,
    };
}
