use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, NodeRef};
use crate::types::{Display, Prop, Style, Value};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node of the render tree: a tag, its style object, passthrough
/// attributes and content.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    /// Reconciliation key, stable across renders for the same list slot.
    pub key: Option<String>,

    pub tag: String,
    pub content: Content,
    pub style: Style,

    /// Passthrough attributes (aria-*, role, data-*, handler ids).
    pub attrs: BTreeMap<String, String>,
    pub node_ref: Option<NodeRef>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            key: None,
            tag: "div".to_string(),
            content: Content::None,
            style: Style::default(),
            attrs: BTreeMap::new(),
            node_ref: None,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    /// A `display: flex` container.
    pub fn flex() -> Self {
        Self {
            id: generate_id("flex"),
            style: Style::new().set(Prop::Display, Display::Flex),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: "span".to_string(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    // Style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_style(mut self, prop: Prop, value: impl Into<Value>) -> Self {
        self.style = self.style.set(prop, value);
        self
    }

    // Passthrough
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&String> {
        self.attrs.get(name)
    }

    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}

/// Produce a copy of a template element with a style patch applied and a
/// caller-assigned key. The template itself is left untouched.
pub trait CloneElement {
    fn clone_with(&self, key: impl Into<String>, patch: &Style) -> Self;
}

impl CloneElement for Element {
    fn clone_with(&self, key: impl Into<String>, patch: &Style) -> Self {
        let mut clone = self.clone();
        clone.id = generate_id("clone");
        clone.key = Some(key.into());
        clone.style.merge(patch);
        clone
    }
}
