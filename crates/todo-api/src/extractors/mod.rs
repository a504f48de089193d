//! Axum extractors for request handling

mod auth;
mod validated;

pub use auth::AuthUser;
pub use validated::ValidatedJson;
