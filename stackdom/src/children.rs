//! Child values as callers hand them to a container, before filtering.

use crate::element::Element;

/// Anything that may appear in a child list. Only elements and text
/// participate in layout; `Null` and `Bool` render nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Element(Element),
    Text(String),
    Null,
    Bool(bool),
}

impl Child {
    pub fn is_renderable(&self) -> bool {
        matches!(self, Self::Element(_) | Self::Text(_))
    }

    pub fn into_element(self) -> Option<Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(text) => Some(Element::text(text)),
            Self::Null | Self::Bool(_) => None,
        }
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Option<Element>> for Child {
    fn from(element: Option<Element>) -> Self {
        element.map_or(Self::Null, Self::Element)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for Child {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<()> for Child {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

/// Keep the renderable children, in order.
pub fn valid_children<C>(children: impl IntoIterator<Item = C>) -> Vec<Element>
where
    C: Into<Child>,
{
    children
        .into_iter()
        .map(Into::<Child>::into)
        .filter(Child::is_renderable)
        .filter_map(Child::into_element)
        .collect()
}
