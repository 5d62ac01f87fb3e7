//! Value objects - immutable types that represent domain concepts

mod actor;
mod hours;
mod log_status;
mod role;
mod week;

pub use actor::Actor;
pub use hours::{format_hours, Hours, HoursError};
pub use log_status::{LogStatus, StatusParseError};
pub use role::{Role, RoleParseError};
pub use week::{GoalPeriod, Week, WeekParseError};
