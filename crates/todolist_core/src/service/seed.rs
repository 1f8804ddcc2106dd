//! Sample tasks loaded when a store starts seeded.

use crate::model::task::{Task, TaskPriority};

/// Returns the three sample tasks in display order.
///
/// One pending HIGH, one pending MEDIUM, one completed LOW.
pub(crate) fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new(
            "Study Rust",
            "Review ownership, borrowing and error handling",
            TaskPriority::High,
        ),
        Task::new(
            "Buy groceries",
            "Milk, bread, fruit and vegetables",
            TaskPriority::Medium,
        ),
        Task::new("Exercise", "30-minute walk in the park", TaskPriority::Low).completed(true),
    ]
}
