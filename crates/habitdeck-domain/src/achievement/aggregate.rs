use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::Criterion;
use crate::shared::AchievementId;

/// A persistent unlockable milestone defined by a criterion over habit data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    id: AchievementId,
    title: String,
    description: String,
    criteria: Criterion,
    #[serde(default)]
    unlocked: bool,
    #[serde(default)]
    unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    pub fn new(
        id: AchievementId,
        title: impl Into<String>,
        description: impl Into<String>,
        criteria: Criterion,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            criteria,
            unlocked: false,
            unlocked_at: None,
        }
    }

    pub fn id(&self) -> &AchievementId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn criteria(&self) -> &Criterion {
        &self.criteria
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn unlocked_at(&self) -> Option<DateTime<Utc>> {
        self.unlocked_at
    }

    /// Mark the achievement unlocked. The transition is one-way: a second
    /// call keeps the original timestamp.
    pub fn unlock(&mut self, at: DateTime<Utc>) {
        if self.unlocked {
            return;
        }
        self.unlocked = true;
        self.unlocked_at = Some(at);
    }

    /// Carry unlocked state over from a persisted record of the same
    /// achievement. Descriptive fields stay as defined here.
    pub fn adopt_unlock_state(&mut self, stored: &Achievement) {
        self.unlocked = stored.unlocked;
        self.unlocked_at = stored.unlocked_at;
    }
}
