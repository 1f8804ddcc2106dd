//! Logical routes between the list and detail projections.

use crate::model::task::TaskId;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub const TASK_LIST_PATH: &str = "task_list";
const TASK_DETAIL_PREFIX: &str = "task_detail";

static TASK_DETAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^task_detail/([^/]+)$").expect("valid detail route regex"));

/// Destination addressed by a route path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `task_list`
    TaskList,
    /// `task_detail/{taskId}`
    TaskDetail(TaskId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    UnknownRoute(String),
    InvalidTaskId(String),
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRoute(path) => write!(f, "unknown route `{path}`"),
            Self::InvalidTaskId(raw) => write!(f, "invalid task id `{raw}` in detail route"),
        }
    }
}

impl Error for RouteError {}

impl Route {
    /// Parses a route path. Surrounding whitespace and slashes are ignored.
    ///
    /// # Errors
    /// - `UnknownRoute` when the path matches neither destination.
    /// - `InvalidTaskId` when a detail path carries a non-UUID id.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim().trim_matches('/');
        if trimmed == TASK_LIST_PATH {
            return Ok(Self::TaskList);
        }

        let captures = TASK_DETAIL_RE
            .captures(trimmed)
            .ok_or_else(|| RouteError::UnknownRoute(trimmed.to_string()))?;
        let raw_id = &captures[1];
        Uuid::parse_str(raw_id)
            .map(Self::TaskDetail)
            .map_err(|_| RouteError::InvalidTaskId(raw_id.to_string()))
    }

    pub fn path(&self) -> String {
        match self {
            Self::TaskList => TASK_LIST_PATH.to_string(),
            Self::TaskDetail(id) => format!("{TASK_DETAIL_PREFIX}/{id}"),
        }
    }
}
