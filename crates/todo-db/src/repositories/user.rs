//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

use todo_core::entities::{NewUser, User};
use todo_core::error::DomainError;
use todo_core::traits::{RepoResult, UserRepository};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_external_subject(&self, subject: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, external_subject, email, display_name, created_at
            FROM users
            WHERE external_subject = $1
            ",
        )
        .bind(subject)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, new_user), fields(subject = %new_user.external_subject))]
    async fn create(&self, new_user: NewUser) -> RepoResult<User> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (id, external_subject, email, display_name, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, external_subject, email, display_name, created_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(&new_user.external_subject)
        .bind(&new_user.email)
        .bind(&new_user.display_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SubjectAlreadyExists))?;

        Ok(User::from(result))
    }

    #[instrument(skip(self, new_user), fields(subject = %new_user.external_subject))]
    async fn find_or_create(&self, new_user: NewUser) -> RepoResult<User> {
        if let Some(user) = self
            .find_by_external_subject(&new_user.external_subject)
            .await?
        {
            return Ok(user);
        }

        let subject = new_user.external_subject.clone();
        match self.create(new_user).await {
            Ok(user) => {
                info!(subject = %subject, "Created user record on first login");
                Ok(user)
            }
            // Lost the first-login race: another request inserted the row
            // between our lookup and insert. The winner's row is the truth.
            Err(DomainError::SubjectAlreadyExists) => self
                .find_by_external_subject(&subject)
                .await?
                .ok_or(DomainError::SubjectAlreadyExists),
            Err(e) => Err(e),
        }
    }
}
