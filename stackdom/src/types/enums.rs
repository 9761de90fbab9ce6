use std::str::FromStr;

use crate::error::Error;

macro_rules! css_keywords {
    ($name:ident, $kind:literal { $($variant:ident => $css:literal),+ $(,)? }) => {
        impl $name {
            pub const fn as_css(&self) -> &'static str {
                match self {
                    $(Self::$variant => $css,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($css => Ok(Self::$variant),)+
                    other => Err(Error::InvalidKeyword {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_css())
            }
        }
    };
}

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

css_keywords!(Direction, "direction" {
    Row => "row",
    Column => "column",
});

/// Cross axis alignment (`align-items` / `align-self`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    FlexStart,
    #[default]
    Center,
    FlexEnd,
    Stretch,
    Baseline,
}

css_keywords!(Align, "align" {
    FlexStart => "flex-start",
    Center => "center",
    FlexEnd => "flex-end",
    Stretch => "stretch",
    Baseline => "baseline",
});

/// Main axis distribution (`justify-content`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

css_keywords!(Justify, "justify" {
    FlexStart => "flex-start",
    Center => "center",
    FlexEnd => "flex-end",
    SpaceBetween => "space-between",
    SpaceAround => "space-around",
    SpaceEvenly => "space-evenly",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

css_keywords!(Wrap, "wrap" {
    NoWrap => "nowrap",
    Wrap => "wrap",
    WrapReverse => "wrap-reverse",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    Flex,
    InlineBlock,
    Inline,
    None,
}

css_keywords!(Display, "display" {
    Block => "block",
    Flex => "flex",
    InlineBlock => "inline-block",
    Inline => "inline",
    None => "none",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

css_keywords!(LineStyle, "line style" {
    Solid => "solid",
    Dashed => "dashed",
    Dotted => "dotted",
});
