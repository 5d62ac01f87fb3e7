//! Shared fixtures for service tests

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use hours_core::entities::{SuperviseeRelation, UserProfile};
use hours_core::traits::{NotifyError, SubmissionNotice, SubmissionNotifier};
use hours_core::{Actor, Role};

use super::context::{ServiceContext, ServiceContextBuilder};

/// Notifier that records every notice, optionally failing afterwards
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<SubmissionNotice>>,
    fail: bool,
    delay: Option<Duration>,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.sent.lock().len()
    }

    /// Wait for background dispatch to record `expected` notices
    pub async fn wait_for(&self, expected: usize) -> usize {
        for _ in 0..50 {
            if self.count() >= expected {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.count()
    }
}

#[async_trait]
impl SubmissionNotifier for RecordingNotifier {
    async fn send_submission_notice(&self, notice: &SubmissionNotice) -> Result<(), NotifyError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.sent.lock().push(notice.clone());
        if self.fail {
            Err(NotifyError::Rejected {
                status: 500,
                body: "mail api down".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

pub fn context_with(notifier: Arc<RecordingNotifier>) -> ServiceContext {
    ServiceContextBuilder::new()
        .memory_store()
        .notifier(notifier)
        .notify_timeout(Duration::from_millis(200))
        .build()
        .unwrap()
}

pub fn context() -> (ServiceContext, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    (context_with(notifier.clone()), notifier)
}

/// Persist a profile and return the matching actor
pub async fn seed_profile(ctx: &ServiceContext, role: Role) -> Actor {
    let id = Uuid::new_v4();
    let profile = UserProfile::new(id, format!("{role} {id}"), format!("{id}@example.com"), role);
    ctx.profile_repo().create(&profile).await.unwrap();
    Actor::new(id, role)
}

pub async fn link(ctx: &ServiceContext, supervisor: Actor, supervisee: Actor) {
    ctx.supervisee_repo()
        .create(&SuperviseeRelation::new(supervisor.user_id, supervisee.user_id))
        .await
        .unwrap();
}
