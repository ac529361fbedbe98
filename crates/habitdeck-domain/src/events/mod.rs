use async_trait::async_trait;
use std::any::Any;

use crate::shared::DomainError;

pub mod achievement_events;

pub use achievement_events::{AchievementUnlocked, AchievementsUpdated, HabitProgressRecorded};

/// Marker trait for events published on the in-app bus.
pub trait DomainEvent: Send + Sync {
    fn as_any(&self) -> &(dyn Any + Send + Sync);

    fn event_type_name(&self) -> &'static str;
}

/// In-app event bus used to tell other components that state changed.
/// Publishing is best-effort from the caller's point of view.
#[async_trait]
pub trait EventBus: Send + Sync {
    async fn publish(&self, event: Box<dyn DomainEvent>) -> Result<(), DomainError>;
}
