//! In-memory task store.
//!
//! Tasks are kept in insertion order behind a [`RwLock`]. Reads share the
//! lock; every mutation holds the write half for the whole operation, so a
//! create, update, or delete is never observed half-applied.

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::models::{seed_tasks, Task};

/// Collection state guarded by the store lock.
#[derive(Debug)]
struct Inner {
    /// Tasks in insertion order.
    tasks: Vec<Task>,
    /// Next ID to hand out. Never decreases.
    next_id: i64,
}

/// Shared, ordered collection of tasks.
#[derive(Debug)]
pub struct TaskStore {
    inner: RwLock<Inner>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Create an empty store. The first task created gets ID 1.
    #[must_use]
    pub fn new() -> Self {
        Self::from_tasks(Vec::new())
    }

    /// Create a store holding the three default seed tasks.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_tasks(seed_tasks())
    }

    /// Create a store from existing tasks, keeping their order.
    ///
    /// New IDs start one past the largest ID present. The counter saturates
    /// at `i64::MAX`, so IDs stay unique only while they remain below it.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(1, |max| max.max(0).saturating_add(1));
        Self {
            inner: RwLock::new(Inner { tasks, next_id }),
        }
    }

    /// All tasks in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        self.inner.read().await.tasks.clone()
    }

    /// Number of stored tasks.
    pub async fn len(&self) -> usize {
        self.inner.read().await.tasks.len()
    }

    /// Whether the store holds no tasks.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.tasks.is_empty()
    }

    /// First task with the given ID.
    pub async fn get(&self, id: i64) -> Result<Task, StoreError> {
        let inner = self.inner.read().await;
        inner
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a task under a freshly assigned ID, discarding any ID it carried.
    pub async fn create(&self, mut task: Task) -> Task {
        let mut inner = self.inner.write().await;
        if task.id != 0 {
            debug!(supplied_id = task.id, "Ignoring client-supplied task ID");
        }
        task.id = inner.next_id;
        inner.next_id = inner.next_id.saturating_add(1);
        inner.tasks.push(task.clone());
        info!(task_id = task.id, total = inner.tasks.len(), "Created task");
        task
    }

    /// Replace the title and details of the task whose ID matches `task.id`.
    pub async fn update(&self, task: Task) -> Result<Task, StoreError> {
        let mut inner = self.inner.write().await;
        let existing = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or(StoreError::NotFound(task.id))?;
        existing.title = task.title;
        existing.details = task.details;
        info!(task_id = existing.id, "Updated task");
        Ok(existing.clone())
    }

    /// Remove the task with the given ID, keeping the order of the rest.
    pub async fn delete(&self, id: i64) -> Result<Task, StoreError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = inner.tasks.remove(index);
        info!(task_id = id, total = inner.tasks.len(), "Deleted task");
        Ok(removed)
    }
}
