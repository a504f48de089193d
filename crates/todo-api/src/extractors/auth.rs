//! Authentication extractor
//!
//! Verifies the bearer credential and resolves its subject claim to an
//! internal owner id, creating the user record on first login.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use todo_service::UserService;
use uuid::Uuid;

use crate::response::ApiError;
use crate::state::AppState;

/// Placeholder email used when the identity provider omits the claim.
/// Only matters on the very first login for a subject.
const FALLBACK_EMAIL: &str = "unknown@example.com";
/// Placeholder display name for a missing name claim
const FALLBACK_NAME: &str = "Unknown User";

/// Authenticated request context with a resolved owner id
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Internal id of the owning user record
    pub user_id: Uuid,
    /// External subject claim the id was resolved from
    pub subject: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::Unauthorized)?;

        let app_state = AppState::from_ref(state);

        // Verify the credential
        let claims = app_state
            .token_service()
            .verify(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid bearer token");
                ApiError::Unauthorized
            })?;

        if claims.sub.is_empty() {
            return Err(ApiError::Unauthorized);
        }

        // Resolve the subject to an internal user record (find-or-create)
        let service = UserService::new(app_state.service_context());
        let user = service
            .find_or_create_user(
                &claims.sub,
                claims.email.as_deref().unwrap_or(FALLBACK_EMAIL),
                claims.name.as_deref().unwrap_or(FALLBACK_NAME),
            )
            .await
            .map_err(|e| ApiError::from_service(e, "Failed to resolve user"))?;

        Ok(AuthUser {
            user_id: user.id,
            subject: claims.sub,
        })
    }
}
