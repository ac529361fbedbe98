use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::achievement::Achievement;
use crate::events::DomainEvent;
use crate::shared::{AchievementId, HabitId};

/// Macro to implement DomainEvent trait with type name
macro_rules! impl_domain_event {
    ($type:ty) => {
        impl DomainEvent for $type {
            fn as_any(&self) -> &(dyn Any + Send + Sync) {
                self
            }

            fn event_type_name(&self) -> &'static str {
                std::any::type_name::<Self>()
            }
        }
    };
}

/// Event fired after every evaluation pass so listening views can refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementsUpdated {
    pub achievements: Vec<Achievement>,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(AchievementsUpdated);

/// Event fired once per achievement that crossed its threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementUnlocked {
    pub achievement_id: AchievementId,
    pub title: String,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(AchievementUnlocked);

/// Event fired when a tap changed a habit's daily progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitProgressRecorded {
    pub habit_id: HabitId,
    pub date: NaiveDate,
    pub progress: u32,
    pub streak: u32,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(HabitProgressRecorded);
