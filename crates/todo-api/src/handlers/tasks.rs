//! Task handlers
//!
//! Endpoints for owner-scoped task CRUD.

use axum::{
    extract::{Path, State},
    Json,
};
use todo_service::{CreateTaskRequest, TaskResponse, TaskService, UpdateTaskRequest};
use uuid::Uuid;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Parse a task id from the path
///
/// A malformed id cannot match any row, so it reports the same way as an
/// unknown one.
fn parse_task_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::TaskNotFound)
}

/// List tasks
///
/// GET /tasks
pub async fn get_all_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<TaskResponse>>> {
    let service = TaskService::new(state.service_context());
    let tasks = service
        .get_all_tasks(auth.user_id)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to fetch tasks"))?;

    Ok(Json(tasks))
}

/// Get task by id
///
/// GET /tasks/{id}
pub async fn get_task_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let id = parse_task_id(&id)?;

    let service = TaskService::new(state.service_context());
    let task = service
        .get_task(id, auth.user_id)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to fetch task"))?;

    Ok(Json(task))
}

/// Create task
///
/// POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTaskRequest>,
) -> ApiResult<Created<Json<TaskResponse>>> {
    let service = TaskService::new(state.service_context());
    let task = service
        .create_task(auth.user_id, request)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to create task"))?;

    Ok(Created(Json(task)))
}

/// Update task
///
/// PUT /tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let id = parse_task_id(&id)?;

    let service = TaskService::new(state.service_context());
    let task = service
        .update_task(id, auth.user_id, request)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to update task"))?;

    Ok(Json(task))
}

/// Delete task (soft delete)
///
/// DELETE /tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    let id = parse_task_id(&id)?;

    let service = TaskService::new(state.service_context());
    service
        .delete_task(id, auth.user_id)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to delete task"))?;

    Ok(NoContent)
}
