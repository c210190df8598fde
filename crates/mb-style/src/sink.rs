//! Update Sink
//!
//! The contract between a style declaration and the element that owns it.
//! The sink receives `(path, value)` patches and is responsible for getting
//! them to the host eventually; the style engine never looks at the outcome.

use mb_shared::Shortcuts;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// One path-addressed patch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Update {
    /// Dotted address of the slot to replace
    pub path: String,
    /// New slot value
    pub value: String,
}

/// Receiver of element patches
pub trait UpdateSink {
    /// Queue a patch. Fire-and-forget.
    fn enqueue_update(&self, update: Update);
}

/// In-memory sink that keeps patches in arrival order until drained.
#[derive(Debug, Default)]
pub struct UpdateQueue {
    pending: RefCell<Vec<Update>>,
}

impl UpdateQueue {
    pub fn new() -> Self {
        Self::default()
    }
    
    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
    
    /// Most recently queued patch
    pub fn last(&self) -> Option<Update> {
        self.pending.borrow().last().cloned()
    }
    
    /// Take every queued patch, leaving the queue empty
    pub fn drain(&self) -> Vec<Update> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }
}

impl UpdateSink for UpdateQueue {
    fn enqueue_update(&self, update: Update) {
        tracing::trace!(path = %update.path, "enqueue update");
        self.pending.borrow_mut().push(update);
    }
}

/// The owning element as seen by its style declaration
#[derive(Clone)]
pub struct StyleOwner {
    path: String,
    sink: Rc<dyn UpdateSink>,
}

impl StyleOwner {
    /// `path` is the element's own dotted path in the page data
    pub fn new(path: impl Into<String>, sink: Rc<dyn UpdateSink>) -> Self {
        Self { path: path.into(), sink }
    }
    
    pub fn path(&self) -> &str {
        &self.path
    }
    
    /// Path of the element's style slot
    pub fn style_path(&self) -> String {
        format!("{}.{}", self.path, Shortcuts::Style)
    }
    
    pub(crate) fn enqueue_style(&self, css_text: String) {
        self.sink.enqueue_update(Update {
            path: self.style_path(),
            value: css_text,
        });
    }
}

impl fmt::Debug for StyleOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleOwner").field("path", &self.path).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_queue_keeps_order() {
        let queue = UpdateQueue::new();
        queue.enqueue_update(Update { path: "a".into(), value: "1".into() });
        queue.enqueue_update(Update { path: "b".into(), value: "2".into() });
        
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.last().map(|u| u.path), Some("b".to_string()));
        
        let drained = queue.drain();
        assert_eq!(drained[0].path, "a");
        assert_eq!(drained[1].path, "b");
        assert!(queue.is_empty());
    }
    
    #[test]
    fn test_style_path_uses_short_key() {
        let owner = StyleOwner::new("root.cn.[0]", Rc::new(UpdateQueue::new()));
        assert_eq!(owner.style_path(), "root.cn.[0].st");
    }
    
    #[test]
    fn test_update_serializes_as_pair() {
        let update = Update { path: "root.st".into(), value: "color: red; ".into() };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "path": "root.st", "value": "color: red; " }));
    }
}
