mod content;
mod node;
mod node_ref;

pub use content::Content;
pub use node::{CloneElement, Element};
pub use node_ref::NodeRef;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Find the first element carrying `key`, depth first.
pub fn find_by_key<'a>(root: &'a Element, key: &str) -> Option<&'a Element> {
    if root.key.as_deref() == Some(key) {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_by_key(child, key))
}
