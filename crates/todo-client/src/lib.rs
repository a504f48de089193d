//! # todo-client
//!
//! Client-side data access for the todo API: a typed HTTP client wrapping
//! the REST surface, and a reactive task store that presentation layers can
//! subscribe to.

pub mod api;
pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{ApiClient, StaticToken, TaskApi, TokenProvider};
pub use error::ClientError;
pub use store::{StoreSnapshot, TaskStore};
pub use types::{CreateTask, Task, TaskStatus, UpdateTask};
