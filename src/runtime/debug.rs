//! Inspector: read accessors for external debug tooling.
//!
//! The runtime records the laid-out tree and the model after every render,
//! and applications may append to the bounded in-memory log. A debug
//! surface (e.g. an HTTP viewer) only ever reads through this handle; the
//! core serves no HTTP itself.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

/// One appended log line.
#[derive(Clone, Debug)]
pub struct LogEntry {
    /// When the line was appended.
    pub at: SystemTime,
    /// The message.
    pub message: String,
}

struct InspectorState {
    view: String,
    model: String,
    log: VecDeque<LogEntry>,
    capacity: usize,
}

/// Cheaply clonable handle to the runtime's introspection state.
#[derive(Clone)]
pub struct Inspector {
    inner: Arc<Mutex<InspectorState>>,
}

impl Inspector {
    /// An inspector retaining up to 1024 log entries.
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// An inspector retaining up to `capacity` log entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(InspectorState {
                view: String::new(),
                model: String::new(),
                log: VecDeque::new(),
                capacity,
            })),
        }
    }

    /// Append a log line, discarding the oldest entries over capacity.
    pub fn log(&self, message: impl Into<String>) {
        let mut state = self.inner.lock().expect("inspector lock");
        while state.log.len() >= state.capacity {
            state.log.pop_front();
        }
        state.log.push_back(LogEntry {
            at: SystemTime::now(),
            message: message.into(),
        });
    }

    /// The retained log entries, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.inner
            .lock()
            .expect("inspector lock")
            .log
            .iter()
            .cloned()
            .collect()
    }

    /// Outline of the most recently laid-out tree.
    pub fn view(&self) -> String {
        self.inner.lock().expect("inspector lock").view.clone()
    }

    /// Debug representation of the current model.
    pub fn model(&self) -> String {
        self.inner.lock().expect("inspector lock").model.clone()
    }

    pub(crate) fn record(&self, view: String, model: String) {
        let mut state = self.inner.lock().expect("inspector lock");
        state.view = view;
        state.model = model;
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_replaces_snapshots() {
        let inspector = Inspector::new();
        inspector.record("tree-1".into(), "model-1".into());
        inspector.record("tree-2".into(), "model-2".into());
        assert_eq!(inspector.view(), "tree-2");
        assert_eq!(inspector.model(), "model-2");
    }

    #[test]
    fn test_log_is_bounded() {
        let inspector = Inspector::with_capacity(2);
        inspector.log("one");
        inspector.log("two");
        inspector.log("three");
        let messages: Vec<String> = inspector.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_clones_share_state() {
        let inspector = Inspector::new();
        let clone = inspector.clone();
        inspector.log("hello");
        assert_eq!(clone.entries().len(), 1);
    }
}
