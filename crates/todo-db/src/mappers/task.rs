//! Task entity <-> model mapper

use todo_core::entities::{Task, TaskStatus};

use crate::models::TaskModel;

/// Convert TaskModel to Task entity
///
/// The status column is constrained by a CHECK to the two known values;
/// anything else would mean the row predates the constraint, so fall back
/// to pending rather than failing the whole query.
impl From<TaskModel> for Task {
    fn from(model: TaskModel) -> Self {
        let status = model
            .status
            .parse::<TaskStatus>()
            .unwrap_or(TaskStatus::Pending);

        Task {
            id: model.id,
            title: model.title,
            description: model.description,
            status,
            owner_id: model.owner_id,
            created_at: model.created_at,
            deleted_at: model.deleted_at,
        }
    }
}
