//! Reqwest-backed mail API adapter
//!
//! Posts one JSON message per notice and maps transport, timeout and HTTP
//! status failures onto `NotifyError`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use tracing::{debug, instrument};

use hours_core::{NotifyError, SubmissionNotice, SubmissionNotifier};

const BODY_PREVIEW_LIMIT: usize = 160;

/// JSON body sent to the mail API
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MailPayload<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub subject: &'a str,
    pub text: String,
}

impl<'a> MailPayload<'a> {
    pub fn new(from: &'a str, notice: &'a SubmissionNotice) -> Self {
        Self {
            from,
            to: &notice.to_email,
            subject: &notice.subject,
            text: notice.text_body(),
        }
    }
}

/// Mail adapter that POSTs notices to one endpoint
pub struct HttpMailer {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
    from_address: String,
    timeout: Duration,
}

impl HttpMailer {
    /// Build a mailer using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        endpoint: Url,
        api_key: Option<String>,
        from_address: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key,
            from_address,
            timeout,
        })
    }

    fn map_transport_error(&self, error: &reqwest::Error) -> NotifyError {
        if error.is_timeout() {
            NotifyError::Timeout(self.timeout.as_secs())
        } else {
            NotifyError::Transport(error.to_string())
        }
    }
}

impl std::fmt::Debug for HttpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpMailer")
            .field("endpoint", &self.endpoint.as_str())
            .field("from_address", &self.from_address)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SubmissionNotifier for HttpMailer {
    #[instrument(skip(self, notice), fields(to = %notice.to_email))]
    async fn send_submission_notice(&self, notice: &SubmissionNotice) -> Result<(), NotifyError> {
        let payload = MailPayload::new(&self.from_address, notice);

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Submission notice accepted by mail API");
            return Ok(());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(&e))?;
        Err(map_status_error(status, body.as_ref(), self.timeout))
    }
}

fn map_status_error(status: StatusCode, body: &[u8], timeout: Duration) -> NotifyError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            NotifyError::Timeout(timeout.as_secs())
        }
        _ => NotifyError::Rejected {
            status: status.as_u16(),
            body: body_preview(body),
        },
    }
}

fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview: String = compact.chars().take(BODY_PREVIEW_LIMIT).collect();
    if compact.chars().count() > BODY_PREVIEW_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice() -> SubmissionNotice {
        SubmissionNotice {
            to_email: "sup@example.com".to_string(),
            subject: SubmissionNotice::SUBJECT.to_string(),
            fields: vec![
                ("Week".to_string(), "2024-W05".to_string()),
                ("Site".to_string(), "Clinic".to_string()),
            ],
        }
    }

    #[test]
    fn test_payload_shape() {
        let notice = notice();
        let payload = MailPayload::new("no-reply@example.com", &notice);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["from"], "no-reply@example.com");
        assert_eq!(json["to"], "sup@example.com");
        assert_eq!(json["subject"], "New clinical hours submission");
        assert_eq!(json["text"], "Week: 2024-W05\nSite: Clinic");
    }

    #[test]
    fn test_status_mapping() {
        let timeout = Duration::from_secs(10);

        let err = map_status_error(StatusCode::GATEWAY_TIMEOUT, b"", timeout);
        assert!(matches!(err, NotifyError::Timeout(10)));

        let err = map_status_error(StatusCode::UNAUTHORIZED, b"bad   key\n", timeout);
        assert!(matches!(
            err,
            NotifyError::Rejected { status: 401, ref body } if body == "bad key"
        ));
    }

    #[test]
    fn test_body_preview_truncates() {
        let long = "x".repeat(BODY_PREVIEW_LIMIT + 10);
        let preview = body_preview(long.as_bytes());
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), BODY_PREVIEW_LIMIT + 3);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Bind then drop a listener so the port is known to be closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mailer = HttpMailer::new(
            format!("http://{addr}/send").parse().unwrap(),
            None,
            "no-reply@example.com".to_string(),
            Duration::from_secs(2),
        )
        .unwrap();

        let err = mailer.send_submission_notice(&notice()).await.unwrap_err();
        assert!(matches!(
            err,
            NotifyError::Transport(_) | NotifyError::Timeout(_)
        ));
    }
}
