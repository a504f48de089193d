//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Length bounds apply to the trimmed value, so whitespace-only
//! input fails the same way empty input does.

use std::borrow::Cow;

use serde::Deserialize;
use todo_core::TaskStatus;
use validator::{Validate, ValidationError};

/// Create task request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(custom(function = validate_new_title))]
    pub title: String,

    #[validate(custom(function = validate_new_description))]
    pub description: String,
}

/// Update task request; every field optional, but at least one must be set
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = at_least_one_field))]
pub struct UpdateTaskRequest {
    #[validate(custom(function = validate_title_change))]
    pub title: Option<String>,

    #[validate(custom(function = validate_description_change))]
    pub description: Option<String>,

    pub status: Option<TaskStatus>,
}

fn trimmed_length(
    value: &str,
    max: usize,
    empty_msg: &'static str,
    long_msg: &'static str,
) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        let mut err = ValidationError::new("length");
        err.message = Some(Cow::Borrowed(empty_msg));
        return Err(err);
    }
    if trimmed.chars().count() > max {
        let mut err = ValidationError::new("length");
        err.message = Some(Cow::Borrowed(long_msg));
        return Err(err);
    }
    Ok(())
}

fn validate_new_title(title: &str) -> Result<(), ValidationError> {
    trimmed_length(
        title,
        200,
        "Title is required",
        "Title must be less than 200 characters",
    )
}

fn validate_new_description(description: &str) -> Result<(), ValidationError> {
    trimmed_length(
        description,
        1000,
        "Description is required",
        "Description must be less than 1000 characters",
    )
}

fn validate_title_change(title: &str) -> Result<(), ValidationError> {
    trimmed_length(title, 200, "Title cannot be empty", "Title too long")
}

fn validate_description_change(description: &str) -> Result<(), ValidationError> {
    trimmed_length(
        description,
        1000,
        "Description cannot be empty",
        "Description too long",
    )
}

fn at_least_one_field(request: &UpdateTaskRequest) -> Result<(), ValidationError> {
    if request.title.is_none() && request.description.is_none() && request.status.is_none() {
        let mut err = ValidationError::new("at_least_one_field");
        err.message = Some(Cow::Borrowed("At least one field must be provided"));
        return Err(err);
    }
    Ok(())
}
