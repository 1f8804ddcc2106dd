//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task store to Dart via FRB through an explicit session handle.
//! - Map core projections into flat, string-keyed response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every mutation goes through the session's single `TaskStore`.
//! - Rejected input never changes store state.

use log::debug;
use std::sync::{Mutex, MutexGuard, PoisonError};
use todolist_core::{
    core_version as core_version_inner, detail_view, init_logging as init_logging_inner,
    list_view, ping as ping_inner, Route, RouteError, TaskDetail, TaskId, TaskListItem,
    TaskPriority, TaskStatistics, TaskStore,
};
use uuid::Uuid;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Creates the session the app holds for its whole lifetime.
///
/// `seed_samples = true` starts with the three sample tasks.
#[flutter_rust_bridge::frb(sync)]
pub fn create_session(seed_samples: bool) -> TaskListSession {
    let store = if seed_samples {
        TaskStore::seeded()
    } else {
        TaskStore::new()
    };
    debug!(
        "event=session_create module=ffi status=ok seeded={} size={}",
        seed_samples,
        store.len()
    );
    TaskListSession {
        store: Mutex::new(store),
    }
}

/// Opaque handle owning one task store.
///
/// Dart keeps a reference and passes it to every call; the core holds no
/// global store.
#[flutter_rust_bridge::frb(opaque)]
pub struct TaskListSession {
    store: Mutex<TaskStore>,
}

/// Generic action response envelope for mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the mutation was applied.
    pub ok: bool,
    /// Affected task ID, when one was resolved.
    pub task_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: TaskId) -> Self {
        Self {
            ok: true,
            task_id: Some(task_id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStatsResponse {
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
}

/// One list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListEntry {
    pub task_id: String,
    pub title: String,
    /// `None` hides the description line.
    pub description_preview: Option<String>,
    pub completed: bool,
    pub strikethrough: bool,
    /// `HIGH|MEDIUM|LOW`.
    pub priority: String,
    /// Detail route path (`task_detail/{id}`) opened on tap.
    pub route: String,
}

/// List route payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    pub statistics: TaskStatsResponse,
    pub items: Vec<TaskListEntry>,
    /// Set only when `items` is empty.
    pub empty_title: Option<String>,
    pub empty_hint: Option<String>,
    /// Store revision this payload was built from.
    pub revision: u64,
}

/// Detail route payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetailResponse {
    pub task_id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub status_label: String,
    pub priority: String,
    pub created_at_label: String,
    pub toggle_action_label: String,
}

impl TaskListSession {
    /// Adds a task from the new-task dialog.
    ///
    /// # FFI contract
    /// - Blank title: `ok=false`, nothing created.
    /// - Unknown priority label: `ok=false`, nothing created.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_task(
        &self,
        title: String,
        description: String,
        priority: String,
    ) -> TaskActionResponse {
        let Some(parsed) = TaskPriority::parse(&priority) else {
            debug!("event=ffi_add module=ffi status=rejected reason=invalid_priority");
            return TaskActionResponse::failure(format!(
                "Unknown priority `{}`; expected HIGH|MEDIUM|LOW.",
                priority.trim()
            ));
        };
        match self.lock().add(title, description, parsed) {
            Some(task_id) => TaskActionResponse::success("Task created.", task_id),
            None => TaskActionResponse::failure("Title is blank."),
        }
    }

    /// Flips completion on one task.
    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle_task(&self, task_id: String) -> TaskActionResponse {
        let id = match parse_task_id(&task_id) {
            Ok(id) => id,
            Err(response) => return response,
        };
        if self.lock().toggle_completion(id) {
            TaskActionResponse::success("Task updated.", id)
        } else {
            TaskActionResponse::failure("Task not found.")
        }
    }

    /// Deletes one task permanently.
    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_task(&self, task_id: String) -> TaskActionResponse {
        let id = match parse_task_id(&task_id) {
            Ok(id) => id,
            Err(response) => return response,
        };
        if self.lock().delete(id) {
            TaskActionResponse::success("Task deleted.", id)
        } else {
            TaskActionResponse::failure("Task not found.")
        }
    }

    /// Returns everything the list route renders.
    #[flutter_rust_bridge::frb(sync)]
    pub fn list_tasks(&self) -> TaskListResponse {
        let store = self.lock();
        let view = list_view(store.list());
        let (empty_title, empty_hint) = match view.empty_state {
            Some(empty) => (Some(empty.title.to_string()), Some(empty.hint.to_string())),
            None => (None, None),
        };
        TaskListResponse {
            statistics: to_stats_response(view.statistics),
            items: view.items.into_iter().map(to_list_entry).collect(),
            empty_title,
            empty_hint,
            revision: store.revision(),
        }
    }

    /// Returns the detail payload, or `None` for a blank detail screen.
    ///
    /// Unparsable and unknown ids both yield `None`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn task_detail(
        &self,
        task_id: String,
        utc_offset_minutes: i32,
    ) -> Option<TaskDetailResponse> {
        let id = Uuid::parse_str(task_id.trim()).ok()?;
        let store = self.lock();
        detail_view(&*store, id, utc_offset_minutes).map(to_detail_response)
    }

    /// Resolves a route path pushed by the host navigator.
    ///
    /// Returns the detail payload for `task_detail/{id}`. The list route,
    /// unknown paths and malformed ids yield `None`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn detail_for_route(
        &self,
        route_path: String,
        utc_offset_minutes: i32,
    ) -> Option<TaskDetailResponse> {
        match Route::parse(&route_path) {
            Ok(Route::TaskDetail(id)) => {
                let store = self.lock();
                detail_view(&*store, id, utc_offset_minutes).map(to_detail_response)
            }
            Ok(Route::TaskList) => None,
            Err(err) => {
                debug!(
                    "event=ffi_route module=ffi status=rejected reason={}",
                    route_error_code(&err)
                );
                None
            }
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn statistics(&self) -> TaskStatsResponse {
        to_stats_response(self.lock().statistics())
    }

    /// Store revision; the UI re-renders when it changes.
    #[flutter_rust_bridge::frb(sync)]
    pub fn revision(&self) -> u64 {
        self.lock().revision()
    }

    fn lock(&self) -> MutexGuard<'_, TaskStore> {
        // A poisoned guard still holds a consistent store.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn parse_task_id(raw: &str) -> Result<TaskId, TaskActionResponse> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        debug!("event=ffi_parse_id module=ffi status=rejected reason=invalid_uuid");
        TaskActionResponse::failure("Task not found.")
    })
}

fn route_error_code(err: &RouteError) -> &'static str {
    match err {
        RouteError::UnknownRoute(_) => "unknown_route",
        RouteError::InvalidTaskId(_) => "invalid_uuid",
    }
}

fn to_stats_response(stats: TaskStatistics) -> TaskStatsResponse {
    TaskStatsResponse {
        total: saturating_u32(stats.total),
        completed: saturating_u32(stats.completed),
        pending: saturating_u32(stats.pending),
    }
}

fn to_list_entry(item: TaskListItem) -> TaskListEntry {
    TaskListEntry {
        task_id: item.id.to_string(),
        route: Route::TaskDetail(item.id).path(),
        title: item.title,
        description_preview: item.description_preview,
        completed: item.completed,
        strikethrough: item.strikethrough,
        priority: item.priority_label.to_string(),
    }
}

fn to_detail_response(detail: TaskDetail) -> TaskDetailResponse {
    TaskDetailResponse {
        task_id: detail.id.to_string(),
        title: detail.title,
        description: detail.description,
        completed: detail.completed,
        status_label: detail.status_label.to_string(),
        priority: detail.priority_label.to_string(),
        created_at_label: detail.created_at_label,
        toggle_action_label: detail.toggle_action_label.to_string(),
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
