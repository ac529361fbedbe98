use async_trait::async_trait;
use log::info;
use tokio::sync::RwLock;

use habitdeck_domain::notification::{NotificationMessage, NotificationSender};
use habitdeck_domain::shared::DomainError;

/// Local notification sender.
///
/// Permission is decided once per process (the OS prompt analog) and
/// remembered. Scheduled messages are kept so the shell can drain and
/// display them; delivery is fire-and-forget.
pub struct LocalNotificationSender {
    granted: bool,
    scheduled: RwLock<Vec<NotificationMessage>>,
}

impl LocalNotificationSender {
    pub fn new() -> Self {
        Self::with_permission(true)
    }

    pub fn with_permission(granted: bool) -> Self {
        Self {
            granted,
            scheduled: RwLock::new(Vec::new()),
        }
    }

    /// Drain everything scheduled since the last call.
    pub async fn take_scheduled(&self) -> Vec<NotificationMessage> {
        std::mem::take(&mut *self.scheduled.write().await)
    }
}

impl Default for LocalNotificationSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSender for LocalNotificationSender {
    async fn ensure_permission(&self) -> Result<bool, DomainError> {
        Ok(self.granted)
    }

    async fn schedule(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        if !self.granted {
            return Err(DomainError::Infrastructure(
                "Notification permission not granted".to_string(),
            ));
        }

        info!(
            "[notify] scheduled title={} achievement_id={:?}",
            message.title,
            message.achievement_id.as_ref().map(|id| id.as_str())
        );
        self.scheduled.write().await.push(message.clone());
        Ok(())
    }
}
