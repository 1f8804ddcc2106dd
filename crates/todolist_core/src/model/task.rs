//! Task domain model.
//!
//! # Responsibility
//! - Define the to-do record shared by the list and detail projections.
//! - Provide the copy-on-toggle helper used by the store.
//!
//! # Invariants
//! - `id` is never nil and never reused for another task.
//! - `title` is non-blank for every task accepted by the store.
//! - Only `completed` changes after creation, and only through `toggled()`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task held by a store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Closed urgency set used for display only.
///
/// Priority never affects the order of the stored sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    High,
    /// Preselected value when a new task is drafted.
    #[default]
    Medium,
    Low,
}

impl TaskPriority {
    /// All priorities in display order.
    pub const ALL: [TaskPriority; 3] = [Self::High, Self::Medium, Self::Low];

    /// Returns the display label (`HIGH|MEDIUM|LOW`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Parses a display label, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Some(Self::High),
            "MEDIUM" => Some(Self::Medium),
            "LOW" => Some(Self::Low),
            _ => None,
        }
    }
}

impl Display for TaskPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    NilId,
    BlankTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
            Self::BlankTitle => write!(f, "task title must not be blank"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do record.
///
/// Construction is restricted to the core crate so every task enters the
/// system through the store's add path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    completed: bool,
    created_at: DateTime<Utc>,
    priority: TaskPriority,
}

impl Task {
    /// Creates an incomplete task with a generated id, stamped with `now`.
    pub(crate) fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, priority, Utc::now())
    }

    /// Creates a task with caller-provided identity and timestamp.
    ///
    /// Does not validate; callers run `validate()` before committing.
    pub(crate) fn with_id(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at,
            priority,
        }
    }

    pub(crate) fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Returns a copy with `completed` inverted and every other field kept.
    pub fn toggled(&self) -> Self {
        self.clone().completed(!self.completed)
    }

    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `BlankTitle` when `title` is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if is_blank(&self.title) {
            return Err(TaskValidationError::BlankTitle);
        }
        Ok(())
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn priority(&self) -> TaskPriority {
        self.priority
    }
}

/// Returns whether `value` is empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
