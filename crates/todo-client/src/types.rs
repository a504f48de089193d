//! Wire types for the task resource
//!
//! These mirror the JSON shapes the server produces and consumes; the
//! client keeps its own copies so it depends only on the wire contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

/// A task as returned by the server
///
/// `deleted_at` is always null in responses; it is carried only so the
/// shape matches the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Payload for creating a task
#[derive(Debug, Clone, Serialize)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
}

/// Payload for a partial task update
///
/// Absent fields are omitted from the request body; the server requires at
/// least one to be present.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}
