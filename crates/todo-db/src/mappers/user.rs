//! User entity <-> model mapper

use todo_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            external_subject: model.external_subject,
            email: model.email,
            display_name: model.display_name,
            created_at: model.created_at,
        }
    }
}
