//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::helpers::mint_token;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// An authenticated test identity with a minted bearer token
///
/// Each call to `unique` produces a never-seen external subject, so the
/// server creates a fresh user row on the first request.
#[derive(Debug)]
pub struct TestUser {
    pub subject: String,
    pub email: String,
    pub name: String,
    pub token: String,
}

impl TestUser {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        let subject = format!("auth0|test-{}-{}", std::process::id(), suffix);
        let email = format!("test{suffix}@example.com");
        let name = format!("Test User {suffix}");
        let token = mint_token(&subject, Some(&email), Some(&name));
        Self {
            subject,
            email,
            name,
            token,
        }
    }

    /// An identity whose token carries no email or name claims
    pub fn without_profile() -> Self {
        let suffix = unique_suffix();
        let subject = format!("auth0|anon-{}-{}", std::process::id(), suffix);
        let token = mint_token(&subject, None, None);
        Self {
            subject,
            email: String::new(),
            name: String::new(),
            token,
        }
    }
}

/// Create task request
#[derive(Debug, Serialize)]
pub struct CreateTaskBody {
    pub title: String,
    pub description: String,
}

impl CreateTaskBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test task {suffix}"),
            description: format!("Description for test task {suffix}"),
        }
    }

    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: "A task created by the integration suite".to_string(),
        }
    }
}

/// Task response
#[derive(Debug, Deserialize)]
pub struct TaskBody {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub user_id: String,
    pub created_at: String,
    pub deleted_at: Option<String>,
}

/// Health response
#[derive(Debug, Deserialize)]
pub struct HealthBody {
    pub status: String,
}

/// Simple error response (401, 404)
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Validation failure response (400)
#[derive(Debug, Deserialize)]
pub struct ValidationErrorBody {
    pub error: String,
    pub details: Vec<FieldIssue>,
}

#[derive(Debug, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}
