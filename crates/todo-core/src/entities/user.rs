//! User entity - internal record for an externally-authenticated principal

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User entity
///
/// Created lazily on the first authenticated request for a never-seen
/// subject; never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    /// Stable subject claim asserted by the identity provider
    pub external_subject: String,
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a new user record
#[derive(Debug, Clone)]
pub struct NewUser {
    pub external_subject: String,
    pub email: String,
    pub display_name: String,
}

impl NewUser {
    pub fn new(
        external_subject: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            external_subject: external_subject.into(),
            email: email.into(),
            display_name: display_name.into(),
        }
    }
}
