//! Trace events and the per-call recorder.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Kind of step recorded in a trace.
///
/// The set is fixed: node removal is reported with [`Action::InsertNode`]
/// (info `"Deleted"`) and rotation preparation with [`Action::RotateEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    SearchVisit,
    InsertNode,
    HighlightNode,
    RotateEvent,
    UpdateStats,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::SearchVisit => "search_visit",
            Action::InsertNode => "insert_node",
            Action::HighlightNode => "highlight_node",
            Action::RotateEvent => "rotate_event",
            Action::UpdateStats => "update_stats",
        }
    }
}

/// One step of a trace. `info` is a human-readable annotation only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub action: Action,
    pub key: i32,
    pub info: String,
}

impl Event {
    pub fn new(action: Action, key: i32, info: impl Into<String>) -> Self {
        Self {
            action,
            key,
            info: info.into(),
        }
    }
}

/// Append-only event buffer for one top-level call.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    events: Vec<Event>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action, key: i32, info: impl Into<String>) {
        let event = Event::new(action, key, info);
        trace!(action = event.action.as_str(), key = event.key, info = %event.info, "trace event");
        self.events.push(event);
    }

    pub fn search_visit(&mut self, key: i32) {
        self.push(Action::SearchVisit, key, "");
    }

    pub fn node_inserted(&mut self, key: i32) {
        self.push(Action::InsertNode, key, "Inserted");
    }

    pub fn node_removed(&mut self, key: i32) {
        self.push(Action::InsertNode, key, "Deleted");
    }

    pub fn successor(&mut self, key: i32) {
        self.push(Action::HighlightNode, key, "Replaced with Successor");
    }

    pub fn stats(&mut self, key: i32, height: i32, bf: i32) {
        self.push(Action::UpdateStats, key, format!("H:{height} BF:{bf}"));
    }

    /// Discards everything recorded so far.
    pub fn reset(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}
