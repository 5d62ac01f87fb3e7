//! Clinical log approval status
//!
//! The canonical vocabulary is `pending`, `accepted` and `declined`. Older rows
//! in the record store may carry `approved` / `denied`; those are only accepted
//! through [`LogStatus::from_stored`] and are never written back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Approval status of a clinical log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    /// Submitted, waiting for the supervisor
    #[default]
    Pending,
    /// Approved by the supervisor (terminal)
    Accepted,
    /// Rejected by the supervisor (terminal)
    Declined,
}

impl LogStatus {
    /// Canonical string form
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }

    /// Terminal states admit no further transition
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Check whether `self -> next` is a legal transition
    #[inline]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Accepted) | (Self::Pending, Self::Declined)
        )
    }

    /// Parse a status read back from the record store, normalising legacy spellings
    pub fn from_stored(value: &str) -> Result<Self, StatusParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "approved" => Ok(Self::Accepted),
            "denied" => Ok(Self::Declined),
            other => other.parse(),
        }
    }
}

impl FromStr for LogStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "declined" => Ok(Self::Declined),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log status: {0}")]
pub struct StatusParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_transitions() {
        assert!(LogStatus::Pending.can_transition_to(LogStatus::Accepted));
        assert!(LogStatus::Pending.can_transition_to(LogStatus::Declined));
        assert!(!LogStatus::Pending.can_transition_to(LogStatus::Pending));
        assert!(!LogStatus::Accepted.can_transition_to(LogStatus::Declined));
        assert!(!LogStatus::Declined.can_transition_to(LogStatus::Accepted));
        assert!(!LogStatus::Accepted.can_transition_to(LogStatus::Pending));
    }

    #[test]
    fn test_terminal_states() {
        assert!(!LogStatus::Pending.is_terminal());
        assert!(LogStatus::Accepted.is_terminal());
        assert!(LogStatus::Declined.is_terminal());
    }

    #[test]
    fn test_strict_parse_rejects_legacy_words() {
        assert_eq!("accepted".parse::<LogStatus>(), Ok(LogStatus::Accepted));
        assert!("approved".parse::<LogStatus>().is_err());
        assert!("denied".parse::<LogStatus>().is_err());
    }

    #[test]
    fn test_from_stored_normalises_legacy_words() {
        assert_eq!(LogStatus::from_stored("approved"), Ok(LogStatus::Accepted));
        assert_eq!(LogStatus::from_stored("Denied"), Ok(LogStatus::Declined));
        assert_eq!(LogStatus::from_stored(" pending "), Ok(LogStatus::Pending));
        assert!(LogStatus::from_stored("archived").is_err());
    }

    #[test]
    fn test_serde_uses_canonical_words() {
        let json = serde_json::to_string(&LogStatus::Declined).unwrap();
        assert_eq!(json, "\"declined\"");
        let status: LogStatus = serde_json::from_str("\"accepted\"").unwrap();
        assert_eq!(status, LogStatus::Accepted);
    }
}
