//! Parsing of raw request fields into domain values
//!
//! Each helper names the offending field in its error so API clients can tell
//! which input was rejected.

use hours_core::value_objects::{GoalPeriod, Hours, LogStatus, Role, Week};
use hours_core::DomainError;
use uuid::Uuid;

use super::error::{ServiceError, ServiceResult};

/// Unwrap a field that `validator` has already checked for presence
pub fn required<'a>(field: &str, value: Option<&'a String>) -> ServiceResult<&'a str> {
    value
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ServiceError::validation(format!("{field} is required")))
}

pub fn parse_week(field: &str, value: &str) -> ServiceResult<Week> {
    value
        .parse()
        .map_err(|e| DomainError::InvalidWeek(format!("{field}: {e}")).into())
}

pub fn parse_optional_week(field: &str, value: Option<&str>) -> ServiceResult<Option<Week>> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| parse_week(field, v))
        .transpose()
}

pub fn parse_period(field: &str, value: &str) -> ServiceResult<GoalPeriod> {
    value
        .parse()
        .map_err(|e| DomainError::InvalidWeek(format!("{field}: {e}")).into())
}

/// Non-negative decimal hours
pub fn parse_hours(field: &str, value: &str) -> ServiceResult<Hours> {
    Hours::parse(value).map_err(|e| DomainError::InvalidHours(format!("{field}: {e}")).into())
}

pub fn parse_id(field: &str, value: &str) -> ServiceResult<Uuid> {
    value
        .trim()
        .parse()
        .map_err(|_| ServiceError::validation(format!("{field} is not a valid id: {value}")))
}

pub fn parse_status(field: &str, value: &str) -> ServiceResult<LogStatus> {
    value
        .trim()
        .parse()
        .map_err(|e| ServiceError::validation(format!("{field}: {e}")))
}

pub fn parse_optional_status(field: &str, value: Option<&str>) -> ServiceResult<Option<LogStatus>> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| parse_status(field, v))
        .transpose()
}

pub fn parse_role(field: &str, value: &str) -> ServiceResult<Role> {
    value
        .parse()
        .map_err(|e| ServiceError::validation(format!("{field}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let value = Some("x".to_string());
        assert_eq!(required("site", value.as_ref()).unwrap(), "x");

        let blank = Some("  ".to_string());
        assert!(required("site", blank.as_ref()).unwrap_err().is_validation());
        assert!(required("site", None).unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_hours_rejects_negative_and_text() {
        assert_eq!(parse_hours("directHours", "2.5").unwrap(), Hours::new(2.5));

        let err = parse_hours("directHours", "-1").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_HOURS");
        assert!(err.to_string().contains("directHours"));

        assert!(parse_hours("directHours", "five").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_week_and_period() {
        assert_eq!(parse_week("week", "2024-W05").unwrap().to_string(), "2024-W05");
        assert_eq!(parse_week("week", "2024-05").unwrap_err().error_code(), "INVALID_WEEK");
        assert_eq!(parse_period("week", "global").unwrap(), GoalPeriod::Global);
        assert_eq!(parse_optional_week("week", Some("")).unwrap(), None);
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("status", "declined").unwrap(), LogStatus::Declined);
        // Legacy spellings are only accepted when reading stored rows
        assert!(parse_status("status", "approved").is_err());
        assert_eq!(parse_optional_status("status", None).unwrap(), None);
    }
}
