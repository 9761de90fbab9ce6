pub mod children;
pub mod element;
pub mod error;
pub mod render;
pub mod responsive;
pub mod theme;
pub mod types;

pub use children::{valid_children, Child};
pub use element::{find_by_key, find_element, CloneElement, Content, Element, NodeRef};
pub use error::{Error, Result};
pub use render::to_html;
pub use responsive::{resolve, Breakpoint, Responsive};
pub use theme::{DefaultTheme, Theme, ThemeConfig};
pub use types::*;
