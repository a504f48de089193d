//! User service
//!
//! Resolves externally-authenticated subjects to internal user records.

use todo_core::entities::{NewUser, User};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Find the user for a subject, creating the record on first login
    ///
    /// Idempotent across repeated calls; email and display name only
    /// matter for the very first creation.
    #[instrument(skip(self, email, display_name))]
    pub async fn find_or_create_user(
        &self,
        subject: &str,
        email: &str,
        display_name: &str,
    ) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_or_create(NewUser::new(subject, email, display_name))
            .await?;

        Ok(user)
    }

    /// Look up a user by subject without creating one
    #[instrument(skip(self))]
    pub async fn get_user_by_subject(&self, subject: &str) -> ServiceResult<Option<User>> {
        Ok(self.ctx.user_repo().find_by_external_subject(subject).await?)
    }
}
