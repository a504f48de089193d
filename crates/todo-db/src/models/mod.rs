//! Database models - SQLx-compatible structs for PostgreSQL tables

mod task;
mod user;

pub use task::TaskModel;
pub use user::UserModel;
