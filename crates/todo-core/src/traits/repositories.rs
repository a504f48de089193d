//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{NewTask, NewUser, Task, TaskChanges, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by the identity-provider subject claim
    async fn find_by_external_subject(&self, subject: &str) -> RepoResult<Option<User>>;

    /// Create a new user record
    ///
    /// Fails with [`DomainError::SubjectAlreadyExists`] if the subject is
    /// already taken.
    async fn create(&self, new_user: NewUser) -> RepoResult<User>;

    /// Look up by subject and create the record only on a miss
    ///
    /// A lost create race against a concurrent first login resolves by
    /// re-fetching the winner rather than failing.
    async fn find_or_create(&self, new_user: NewUser) -> RepoResult<User>;
}

// ============================================================================
// Task Repository
// ============================================================================

/// All operations are scoped to the owning user and implicitly filtered to
/// active rows (`deleted_at` unset). A task that does not exist, belongs to
/// another owner, or has been soft-deleted is uniformly reported as absent.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List the owner's active tasks, newest first
    async fn list_by_owner(&self, owner_id: Uuid) -> RepoResult<Vec<Task>>;

    /// Find one active task by id and owner
    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> RepoResult<Option<Task>>;

    /// Create a new task; status starts as pending
    async fn create(&self, owner_id: Uuid, new_task: NewTask) -> RepoResult<Task>;

    /// Apply a partial update; only supplied fields change
    async fn update(
        &self,
        id: Uuid,
        owner_id: Uuid,
        changes: TaskChanges,
    ) -> RepoResult<Option<Task>>;

    /// Mark a task deleted; returns whether exactly one active row matched
    async fn soft_delete(&self, id: Uuid, owner_id: Uuid) -> RepoResult<bool>;
}
