//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold tasks in insertion order behind a small positional API.
//! - Keep storage details out of the store's policy code.
//!
//! # Invariants
//! - Order is insertion order; no rank is stored on the record.
//! - The repository applies no validation or notification policy.

use crate::model::task::{Task, TaskId};

/// Ordered storage for task records.
pub trait TaskRepository {
    fn append(&mut self, task: Task);
    fn position(&self, id: TaskId) -> Option<usize>;
    fn replace_at(&mut self, index: usize, task: Task) -> Task;
    fn remove_at(&mut self, index: usize) -> Task;
    fn as_slice(&self) -> &[Task];

    fn get(&self, id: TaskId) -> Option<&Task> {
        self.position(id).map(|index| &self.as_slice()[index])
    }

    fn contains(&self, id: TaskId) -> bool {
        self.position(id).is_some()
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// `Vec`-backed repository. State is lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// # Panics
    /// Panics when `index` is out of bounds; callers pass indices from
    /// `position()`.
    fn replace_at(&mut self, index: usize, task: Task) -> Task {
        std::mem::replace(&mut self.tasks[index], task)
    }

    fn remove_at(&mut self, index: usize) -> Task {
        self.tasks.remove(index)
    }

    fn as_slice(&self) -> &[Task] {
        &self.tasks
    }
}
