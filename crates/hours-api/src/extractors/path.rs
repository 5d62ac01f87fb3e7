//! Path parameter parsing
//!
//! Record ids are UUIDs; user ids may also be the `@me` alias.

use hours_core::Actor;
use uuid::Uuid;

use crate::response::ApiError;

/// Path segment standing for the caller's own id
pub const SELF_ALIAS: &str = "@me";

/// Parse a UUID path parameter
pub fn parse_id(raw: &str, name: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {name} format")))
}

/// Resolve a user id path parameter, honouring `@me`
pub fn resolve_user_id(raw: &str, actor: Actor) -> Result<Uuid, ApiError> {
    if raw == SELF_ALIAS {
        Ok(actor.user_id)
    } else {
        parse_id(raw, "user_id")
    }
}
