//! Task service
//!
//! Thin delegation to the task repository with the authenticated owner id.
//! Input normalization (trimming) happens here; ownership filtering is
//! already baked into every repository query.

use todo_core::entities::{NewTask, TaskChanges};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateTaskRequest, TaskResponse, UpdateTaskRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Task service
pub struct TaskService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TaskService<'a> {
    /// Create a new TaskService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the owner's active tasks, newest first
    #[instrument(skip(self))]
    pub async fn get_all_tasks(&self, owner_id: Uuid) -> ServiceResult<Vec<TaskResponse>> {
        let tasks = self.ctx.task_repo().list_by_owner(owner_id).await?;
        Ok(tasks.into_iter().map(TaskResponse::from).collect())
    }

    /// Get one task by id
    #[instrument(skip(self))]
    pub async fn get_task(&self, id: Uuid, owner_id: Uuid) -> ServiceResult<TaskResponse> {
        let task = self
            .ctx
            .task_repo()
            .find_by_id(id, owner_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Task", id.to_string()))?;

        Ok(TaskResponse::from(task))
    }

    /// Create a new task for the owner
    #[instrument(skip(self, request))]
    pub async fn create_task(
        &self,
        owner_id: Uuid,
        request: CreateTaskRequest,
    ) -> ServiceResult<TaskResponse> {
        let new_task = NewTask {
            title: request.title.trim().to_string(),
            description: request.description.trim().to_string(),
        };

        let task = self.ctx.task_repo().create(owner_id, new_task).await?;
        info!(task_id = %task.id, "Task created");

        Ok(TaskResponse::from(task))
    }

    /// Apply a partial update to a task
    #[instrument(skip(self, request))]
    pub async fn update_task(
        &self,
        id: Uuid,
        owner_id: Uuid,
        request: UpdateTaskRequest,
    ) -> ServiceResult<TaskResponse> {
        let changes = TaskChanges {
            title: request.title.map(|t| t.trim().to_string()),
            description: request.description.map(|d| d.trim().to_string()),
            status: request.status,
        };

        let task = self
            .ctx
            .task_repo()
            .update(id, owner_id, changes)
            .await?
            .ok_or_else(|| ServiceError::not_found("Task", id.to_string()))?;

        Ok(TaskResponse::from(task))
    }

    /// Soft-delete a task
    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: Uuid, owner_id: Uuid) -> ServiceResult<()> {
        let deleted = self.ctx.task_repo().soft_delete(id, owner_id).await?;

        if !deleted {
            return Err(ServiceError::not_found("Task", id.to_string()));
        }

        info!(task_id = %id, "Task soft-deleted");
        Ok(())
    }
}
