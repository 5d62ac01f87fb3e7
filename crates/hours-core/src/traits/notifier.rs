//! Notification port - outbound notice to a supervisor

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::ClinicalLog;

/// Email notice sent when a clinical log is submitted
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionNotice {
    pub to_email: String,
    pub subject: String,
    /// Ordered label/value pairs rendered into the message body
    pub fields: Vec<(String, String)>,
}

impl SubmissionNotice {
    pub const SUBJECT: &'static str = "New clinical hours submission";

    /// Build the notice for a freshly submitted log
    pub fn for_clinical_log(to_email: impl Into<String>, log: &ClinicalLog) -> Self {
        Self {
            to_email: to_email.into(),
            subject: Self::SUBJECT.to_string(),
            fields: vec![
                ("Week".to_string(), log.week.to_string()),
                ("Direct hours".to_string(), log.direct_hours.to_string()),
                ("Indirect hours".to_string(), log.indirect_hours.to_string()),
                ("Site".to_string(), log.site.clone()),
                ("Status".to_string(), log.status.to_string()),
            ],
        }
    }

    /// Plain-text body, one `label: value` line per field
    pub fn text_body(&self) -> String {
        self.fields
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Notification dispatch errors
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification transport failed: {0}")]
    Transport(String),

    #[error("mail service rejected the notice ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("notification timed out after {0}s")]
    Timeout(u64),
}

#[async_trait]
pub trait SubmissionNotifier: Send + Sync {
    /// Deliver a submission notice
    async fn send_submission_notice(&self, notice: &SubmissionNotice) -> Result<(), NotifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Hours;
    use uuid::Uuid;

    #[test]
    fn test_notice_for_clinical_log() {
        let log = ClinicalLog::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "2024-W05".parse().unwrap(),
            Hours::new(5.0),
            Hours::new(3.5),
            "Riverside".to_string(),
        );

        let notice = SubmissionNotice::for_clinical_log("sup@example.com", &log);
        assert_eq!(notice.to_email, "sup@example.com");
        assert_eq!(notice.subject, SubmissionNotice::SUBJECT);
        assert_eq!(
            notice.text_body(),
            "Week: 2024-W05\nDirect hours: 5\nIndirect hours: 3.5\nSite: Riverside\nStatus: pending"
        );
    }
}
