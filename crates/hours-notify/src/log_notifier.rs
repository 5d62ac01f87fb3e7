//! Log-only notifier

use async_trait::async_trait;
use tracing::info;

use hours_core::{NotifyError, SubmissionNotice, SubmissionNotifier};

/// Writes each notice to the log instead of sending it
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl SubmissionNotifier for LogNotifier {
    async fn send_submission_notice(&self, notice: &SubmissionNotice) -> Result<(), NotifyError> {
        info!(
            to = %notice.to_email,
            subject = %notice.subject,
            body = %notice.text_body(),
            "Submission notice (not sent, no mail endpoint configured)"
        );
        Ok(())
    }
}
