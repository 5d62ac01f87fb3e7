//! # hours-notify
//!
//! Notification dispatch adapters implementing `SubmissionNotifier`:
//!
//! - [`HttpMailer`] posts notices to an HTTP mail API with reqwest
//! - [`LogNotifier`] only logs them, for development and tests

mod http_mailer;
mod log_notifier;

pub use http_mailer::{HttpMailer, MailPayload};
pub use log_notifier::LogNotifier;

use std::sync::Arc;
use std::time::Duration;

use hours_common::MailConfig;
use hours_core::SubmissionNotifier;

/// Build the notifier described by the mail configuration.
///
/// Without an endpoint notices are logged instead of sent.
///
/// # Errors
/// Returns an error if the endpoint is not a valid URL or the HTTP client cannot be built
pub fn notifier_from_config(
    config: &MailConfig,
) -> Result<Arc<dyn SubmissionNotifier>, NotifierSetupError> {
    let Some(endpoint) = config.endpoint.as_deref() else {
        tracing::info!("No mail endpoint configured, submission notices will only be logged");
        return Ok(Arc::new(LogNotifier));
    };

    let endpoint = endpoint
        .parse()
        .map_err(|_| NotifierSetupError::InvalidEndpoint(endpoint.to_string()))?;
    let mailer = HttpMailer::new(
        endpoint,
        config.api_key.clone(),
        config.from_address.clone(),
        Duration::from_secs(config.timeout_secs),
    )
    .map_err(|e| NotifierSetupError::Client(e.to_string()))?;

    Ok(Arc::new(mailer))
}

/// Errors building a notifier
#[derive(Debug, thiserror::Error)]
pub enum NotifierSetupError {
    #[error("invalid mail endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("mail client could not be built: {0}")]
    Client(String),
}
