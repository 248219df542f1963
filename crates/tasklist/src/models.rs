//! Task record shared by the store and the HTTP layer.

use serde::{Deserialize, Serialize};

/// A single task.
///
/// Fields absent from an incoming JSON body fall back to their zero value,
/// and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Store-assigned identifier.
    pub id: i64,
    /// Short label.
    pub title: String,
    /// Free-text description.
    pub details: String,
}

impl Task {
    /// Create a task with the given fields.
    #[must_use]
    pub fn new(id: i64, title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            details: details.into(),
        }
    }
}

/// Records every freshly started server holds unless seeding is disabled.
#[must_use]
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "Task 1", "First task"),
        Task::new(2, "Task 2", "Second task"),
        Task::new(3, "Task 3", "Third task"),
    ]
}
