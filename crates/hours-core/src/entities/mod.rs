//! Domain entities - core business objects

mod clinical_log;
mod goal;
mod supervisee;
mod supervision_log;
mod user_profile;

pub use clinical_log::ClinicalLog;
pub use goal::Goal;
pub use supervisee::SuperviseeRelation;
pub use supervision_log::SupervisionLog;
pub use user_profile::UserProfile;
