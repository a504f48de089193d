//! Repository traits (ports)

mod repositories;

pub use repositories::{RepoResult, TaskRepository, UserRepository};
