//! # todo-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{CreateTaskRequest, HealthResponse, TaskResponse, UpdateTaskRequest};
pub use services::{
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, TaskService, UserService,
};
