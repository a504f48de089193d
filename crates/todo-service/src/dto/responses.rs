//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. The task shape
//! (`_id`, `user_id`, snake_case timestamps) matches what the client store
//! consumes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use todo_core::{Task, TaskStatus};
use uuid::Uuid;

/// Task response
///
/// `deleted_at` is always `null`: soft-deleted rows are never returned, so
/// the field exists only to keep the wire shape stable.
#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            user_id: task.owner_id,
            created_at: task.created_at,
            deleted_at: None,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
