//! PostgreSQL implementation of TaskRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use todo_core::entities::{NewTask, Task, TaskChanges};
use todo_core::traits::{RepoResult, TaskRepository};

use crate::models::TaskModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TaskRepository
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    /// Create a new PgTaskRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    #[instrument(skip(self))]
    async fn list_by_owner(&self, owner_id: Uuid) -> RepoResult<Vec<Task>> {
        let rows = sqlx::query_as::<_, TaskModel>(
            r"
            SELECT id, title, description, status, owner_id, created_at, deleted_at
            FROM tasks
            WHERE owner_id = $1 AND deleted_at IS NULL
            ORDER BY created_at DESC
            ",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> RepoResult<Option<Task>> {
        let result = sqlx::query_as::<_, TaskModel>(
            r"
            SELECT id, title, description, status, owner_id, created_at, deleted_at
            FROM tasks
            WHERE id = $1 AND owner_id = $2 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Task::from))
    }

    #[instrument(skip(self, new_task))]
    async fn create(&self, owner_id: Uuid, new_task: NewTask) -> RepoResult<Task> {
        let result = sqlx::query_as::<_, TaskModel>(
            r"
            INSERT INTO tasks (id, title, description, status, owner_id, created_at)
            VALUES ($1, $2, $3, 'pending', $4, NOW())
            RETURNING id, title, description, status, owner_id, created_at, deleted_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(&new_task.title)
        .bind(&new_task.description)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Task::from(result))
    }

    #[instrument(skip(self, changes))]
    async fn update(
        &self,
        id: Uuid,
        owner_id: Uuid,
        changes: TaskChanges,
    ) -> RepoResult<Option<Task>> {
        let result = sqlx::query_as::<_, TaskModel>(
            r"
            UPDATE tasks
            SET title = COALESCE($3, title),
                description = COALESCE($4, description),
                status = COALESCE($5, status)
            WHERE id = $1 AND owner_id = $2 AND deleted_at IS NULL
            RETURNING id, title, description, status, owner_id, created_at, deleted_at
            ",
        )
        .bind(id)
        .bind(owner_id)
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.status.map(|s| s.as_str()))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Task::from))
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Uuid, owner_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE tasks
            SET deleted_at = NOW()
            WHERE id = $1 AND owner_id = $2 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .bind(owner_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }
}
