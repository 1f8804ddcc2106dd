//! Core domain logic for the to-do list.
//! This crate is the single source of truth for task invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskPriority, TaskValidationError};
pub use repo::task_repo::{InMemoryTaskRepository, TaskRepository};
pub use service::subscription::{StoreEvent, SubscriptionId, TaskListener};
pub use service::task_store::TaskStore;
pub use view::projection::{
    detail_view, list_view, TaskDetail, TaskListItem, TaskListView, TaskStatistics,
};
pub use view::route::{Route, RouteError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
