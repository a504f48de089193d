//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: Uuid,
    pub external_subject: String,
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}
