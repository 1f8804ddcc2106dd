//! Display projections for the list and detail routes.
//!
//! # Responsibility
//! - Turn task records into render-ready values for host UIs.
//! - Compute list statistics.
//!
//! # Invariants
//! - Projections are pure reads; they never touch store state.
//! - An unknown or deleted id projects to `None`, not an error.

use crate::model::task::{is_blank, Task, TaskId};
use crate::repo::task_repo::TaskRepository;
use crate::service::task_store::TaskStore;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

const DESCRIPTION_PREVIEW_MAX_CHARS: usize = 100;
const CREATED_AT_FORMAT: &str = "%d/%m/%Y %H:%M";

pub const EMPTY_DESCRIPTION_TEXT: &str = "No description";
pub const EMPTY_LIST_TITLE: &str = "No tasks yet";
pub const EMPTY_LIST_HINT: &str = "Tap + to add one";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Counts shown above the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStatistics {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskStatistics {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.is_completed()).count();
        Self {
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
        }
    }
}

/// One row of the list route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListItem {
    pub id: TaskId,
    pub title: String,
    /// Single-line description summary; `None` when the description is blank.
    pub description_preview: Option<String>,
    pub completed: bool,
    /// Completed rows render with their title struck through.
    pub strikethrough: bool,
    pub priority_label: &'static str,
}

impl From<&Task> for TaskListItem {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_string(),
            description_preview: description_preview(task.description()),
            completed: task.is_completed(),
            strikethrough: task.is_completed(),
            priority_label: task.priority().as_str(),
        }
    }
}

/// Copy shown when the list has no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

/// Everything the list route renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListView {
    pub statistics: TaskStatistics,
    pub items: Vec<TaskListItem>,
    /// Present only when `items` is empty.
    pub empty_state: Option<EmptyState>,
}

/// Everything the detail route renders for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDetail {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub status_label: &'static str,
    pub priority_label: &'static str,
    pub created_at_label: String,
    pub toggle_action_label: &'static str,
}

impl TaskDetail {
    /// Builds the detail projection, formatting `created_at` at the given
    /// UTC offset.
    pub fn from_task(task: &Task, utc_offset_minutes: i32) -> Self {
        let description = if is_blank(task.description()) {
            EMPTY_DESCRIPTION_TEXT.to_string()
        } else {
            task.description().to_string()
        };
        Self {
            id: task.id(),
            title: task.title().to_string(),
            description,
            completed: task.is_completed(),
            status_label: status_label(task.is_completed()),
            priority_label: task.priority().as_str(),
            created_at_label: format_created_at(task.created_at(), utc_offset_minutes),
            toggle_action_label: toggle_action_label(task.is_completed()),
        }
    }
}

/// Projects the list route from the current sequence.
pub fn list_view(tasks: &[Task]) -> TaskListView {
    let items = tasks.iter().map(TaskListItem::from).collect::<Vec<_>>();
    let empty_state = items.is_empty().then_some(EmptyState {
        title: EMPTY_LIST_TITLE,
        hint: EMPTY_LIST_HINT,
    });
    TaskListView {
        statistics: TaskStatistics::from_tasks(tasks),
        items,
        empty_state,
    }
}

/// Projects the detail route for `id`, or `None` for a blank screen.
pub fn detail_view<R: TaskRepository>(
    store: &TaskStore<R>,
    id: TaskId,
    utc_offset_minutes: i32,
) -> Option<TaskDetail> {
    store
        .get_by_id(id)
        .map(|task| TaskDetail::from_task(task, utc_offset_minutes))
}

pub fn status_label(completed: bool) -> &'static str {
    if completed {
        "Completed"
    } else {
        "Pending"
    }
}

pub fn toggle_action_label(completed: bool) -> &'static str {
    if completed {
        "Mark as pending"
    } else {
        "Complete"
    }
}

/// Formats as `dd/MM/yyyy HH:mm` at `utc_offset_minutes`.
///
/// Offsets outside +/-24h fall back to UTC.
pub fn format_created_at(created_at: DateTime<Utc>, utc_offset_minutes: i32) -> String {
    let offset = utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());
    created_at
        .with_timezone(&offset)
        .format(CREATED_AT_FORMAT)
        .to_string()
}

fn description_preview(description: &str) -> Option<String> {
    let normalized = WHITESPACE_RE.replace_all(description, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut preview = trimmed
        .chars()
        .take(DESCRIPTION_PREVIEW_MAX_CHARS)
        .collect::<String>();
    if trimmed.chars().count() > DESCRIPTION_PREVIEW_MAX_CHARS {
        preview.push_str("...");
    }
    Some(preview)
}
