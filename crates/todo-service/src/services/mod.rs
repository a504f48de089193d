//! Business logic services

pub mod context;
pub mod error;
pub mod task;
#[cfg(test)]
pub(crate) mod test_support;
pub mod user;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use task::TaskService;
pub use user::UserService;
