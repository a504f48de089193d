//! Domain entities

mod task;
mod user;

pub use task::{NewTask, Task, TaskChanges, TaskStatus, UnknownStatus};
pub use user::{NewUser, User};
