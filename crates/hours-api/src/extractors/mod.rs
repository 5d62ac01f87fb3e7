//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and path parameters.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::{AuthUser, CurrentActor};
pub use path::{parse_id, resolve_user_id, SELF_ALIAS};
pub use query::QueryParams;
pub use validated::ValidatedJson;
