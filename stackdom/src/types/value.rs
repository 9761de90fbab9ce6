use super::{Align, Color, Direction, Display, Justify, Length, LineStyle, Wrap};

/// Style property keys.
///
/// `MarginX`/`MarginY` are axis shorthands; they expand to the two
/// physical sides when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prop {
    Display,
    FlexDirection,
    AlignItems,
    JustifyContent,
    FlexWrap,
    AlignSelf,
    Width,
    Height,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    MarginX,
    MarginY,
    BorderLeft,
    BorderBottom,
    BorderColor,
}

impl Prop {
    /// Physical properties an axis shorthand stands for. Empty for
    /// everything else.
    pub const fn longhands(&self) -> &'static [Prop] {
        match self {
            Self::MarginX => &[Self::MarginLeft, Self::MarginRight],
            Self::MarginY => &[Self::MarginTop, Self::MarginBottom],
            _ => &[],
        }
    }

    /// CSS property names this key writes.
    pub const fn css_names(&self) -> &'static [&'static str] {
        match self {
            Self::Display => &["display"],
            Self::FlexDirection => &["flex-direction"],
            Self::AlignItems => &["align-items"],
            Self::JustifyContent => &["justify-content"],
            Self::FlexWrap => &["flex-wrap"],
            Self::AlignSelf => &["align-self"],
            Self::Width => &["width"],
            Self::Height => &["height"],
            Self::MarginTop => &["margin-top"],
            Self::MarginRight => &["margin-right"],
            Self::MarginBottom => &["margin-bottom"],
            Self::MarginLeft => &["margin-left"],
            Self::MarginX => &["margin-left", "margin-right"],
            Self::MarginY => &["margin-top", "margin-bottom"],
            Self::BorderLeft => &["border-left"],
            Self::BorderBottom => &["border-bottom"],
            Self::BorderColor => &["border-color"],
        }
    }
}

/// One side's border: width, line style and optional color.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderLine {
    pub width: Length,
    pub style: LineStyle,
    pub color: Option<Color>,
}

impl BorderLine {
    pub const fn solid(px: f32) -> Self {
        Self {
            width: Length::Px(px),
            style: LineStyle::Solid,
            color: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// A style property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Length(Length),
    Border(BorderLine),
    /// Explicit `none`: clears whatever the property held before.
    None,
    Display(Display),
    Direction(Direction),
    Align(Align),
    Justify(Justify),
    Wrap(Wrap),
    Color(Color),
    /// Passed through to the stylesheet verbatim (`inherit`, `initial`, ...).
    Keyword(String),
}

impl Value {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self::Keyword(keyword.into())
    }
}

impl From<Length> for Value {
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}

impl From<BorderLine> for Value {
    fn from(border: BorderLine) -> Self {
        Self::Border(border)
    }
}

impl From<Display> for Value {
    fn from(display: Display) -> Self {
        Self::Display(display)
    }
}

impl From<Direction> for Value {
    fn from(direction: Direction) -> Self {
        Self::Direction(direction)
    }
}

impl From<Align> for Value {
    fn from(align: Align) -> Self {
        Self::Align(align)
    }
}

impl From<Justify> for Value {
    fn from(justify: Justify) -> Self {
        Self::Justify(justify)
    }
}

impl From<Wrap> for Value {
    fn from(wrap: Wrap) -> Self {
        Self::Wrap(wrap)
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}
