//! # todo-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! Provides:
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity <-> model mappers
//! - Repository implementations

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgTaskRepository, PgUserRepository};
