//! Response types and error handling for API endpoints
//!
//! The error bodies here mirror what the client store expects: a flat
//! `error` string, plus `details` for validation failures and `message`
//! for persistence failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use todo_service::ServiceError;
use tracing::error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or unverifiable identity credential
    #[error("Unauthorized")]
    Unauthorized,

    /// Request body failed schema validation
    #[error("Validation failed")]
    Validation(Vec<FieldIssue>),

    /// Task absent, not owned, or soft-deleted; never distinguished
    #[error("Task not found")]
    TaskNotFound,

    /// Unexpected failure from the persistence layer
    #[error("{context}: {message}")]
    Persistence {
        context: &'static str,
        message: String,
    },
}

/// A single field-level validation issue
#[derive(Debug, Clone, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::TaskNotFound => StatusCode::NOT_FOUND,
            Self::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map a service failure for one operation, attaching the
    /// operation-specific 500 context
    pub fn from_service(err: ServiceError, context: &'static str) -> Self {
        if err.is_not_found() {
            Self::TaskNotFound
        } else {
            Self::Persistence {
                context,
                message: err.to_string(),
            }
        }
    }

    /// Build validation issues from `validator` output
    pub fn from_validation_errors(errors: &ValidationErrors) -> Self {
        let details = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, issues)| {
                issues.iter().map(move |issue| FieldIssue {
                    field: field.to_string(),
                    message: issue
                        .message
                        .as_ref()
                        .map_or_else(|| issue.code.to_string(), ToString::to_string),
                })
            })
            .collect();

        Self::Validation(details)
    }

    /// Single-issue validation error for malformed request bodies
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldIssue {
            field: "body".to_string(),
            message: message.into(),
        }])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        let body = match &self {
            Self::Unauthorized => json!({ "error": "Unauthorized" }),
            Self::Validation(details) => json!({
                "error": "Validation failed",
                "details": details,
            }),
            Self::TaskNotFound => json!({ "error": "Task not found" }),
            Self::Persistence { context, message } => json!({
                "error": context,
                "message": message,
            }),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}

/// No content response (204)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
