use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::{AchievementId, DomainError};

/// Notification message to be shown on the device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// Message title
    pub title: String,
    /// Message body
    pub body: String,
    /// Achievement that triggered the notification, if any
    pub achievement_id: Option<AchievementId>,
}

impl NotificationMessage {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            achievement_id: None,
        }
    }

    pub fn for_achievement(mut self, id: AchievementId) -> Self {
        self.achievement_id = Some(id);
        self
    }
}

/// Local notification collaborator.
///
/// Callers treat every error from this trait as non-fatal by design:
/// the state mutation that triggered the notification has already
/// committed, and a denied permission is a normal negative outcome.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Request (or confirm) permission to show notifications.
    async fn ensure_permission(&self) -> Result<bool, DomainError>;

    /// Schedule an immediate local notification.
    async fn schedule(&self, message: &NotificationMessage) -> Result<(), DomainError>;
}
