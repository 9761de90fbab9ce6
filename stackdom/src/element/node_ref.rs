use std::sync::{Arc, Mutex};

/// Shared handle to a mounted node.
///
/// Components forward it to the element they want the caller to reach;
/// the renderer fills in the mounted node's id. Two refs are equal only if
/// they are the same handle.
#[derive(Clone, Default)]
pub struct NodeRef(Arc<Mutex<Option<String>>>);

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the node this ref is bound to, if mounted.
    pub fn get(&self) -> Option<String> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_bound(&self) -> bool {
        self.get().is_some()
    }

    pub(crate) fn bind(&self, id: &str) {
        *self.0.lock().unwrap_or_else(|e| e.into_inner()) = Some(id.to_string());
    }

    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl std::fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeRef({:?})", self.get())
    }
}
