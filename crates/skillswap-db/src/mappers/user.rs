//! User entity <-> model mapper

use skillswap_core::entities::User;
use skillswap_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            name: model.name,
            email: model.email,
            skills_offered: model.skills_offered,
            skills_wanted: model.skills_wanted,
            availability: model.availability,
            location: model.location,
            photo_url: model.photo_url,
            is_public: model.is_public,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
