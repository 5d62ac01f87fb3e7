//! Profile entity <-> model mapper

use hours_core::entities::UserProfile;
use hours_core::value_objects::Role;

use crate::models::ProfileModel;

/// Unknown role text is read as the least privileged role
impl From<ProfileModel> for UserProfile {
    fn from(model: ProfileModel) -> Self {
        let role = model.role.parse().unwrap_or_else(|_| {
            tracing::warn!(profile_id = %model.id, role = %model.role, "Unknown role in profile row");
            Role::User
        });

        UserProfile {
            id: model.id,
            name: model.name,
            email: model.email,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
