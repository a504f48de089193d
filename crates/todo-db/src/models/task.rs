//! Task database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for tasks table
///
/// `status` is stored as text constrained by a CHECK to the two known
/// values; the mapper converts it to the domain enum.
#[derive(Debug, Clone, FromRow)]
pub struct TaskModel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TaskModel {
    /// Check if the task is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
