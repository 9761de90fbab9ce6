mod color;
mod enums;
mod length;
mod style;
mod value;

pub use color::{Color, Rgb};
pub use enums::{Align, Direction, Display, Justify, LineStyle, Wrap};
pub use length::Length;
pub use style::{Selector, Style};
pub use value::{BorderLine, Prop, Value};
