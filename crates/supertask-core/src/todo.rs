//! Todo Item

use serde::{Deserialize, Serialize};

/// One checklist entry. Identity is its position in the list.
///
/// Stored entries missing a field read back as empty text / not completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// Build a pending item, rejecting text that is blank after trimming.
    ///
    /// The stored text keeps its original padding.
    pub fn new(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            completed: false,
        })
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Whether this item is reported as a finished task on submit
    pub fn counts_as_done(&self) -> bool {
        self.completed && !self.text.trim().is_empty()
    }
}
