//! Supervisee relation entity <-> model mapper

use hours_core::entities::SuperviseeRelation;

use crate::models::SuperviseeModel;

impl From<SuperviseeModel> for SuperviseeRelation {
    fn from(model: SuperviseeModel) -> Self {
        SuperviseeRelation {
            supervisor_id: model.supervisor_id,
            supervisee_id: model.supervisee_id,
            created_at: model.created_at,
        }
    }
}
