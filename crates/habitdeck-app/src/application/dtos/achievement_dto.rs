use serde::{Deserialize, Serialize};

use habitdeck_domain::achievement::Achievement;

/// Achievement as the achievements tab shows it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub unlocked: bool,
    pub unlocked_at: Option<String>, // ISO 8601 timestamp
}

impl From<&Achievement> for AchievementDto {
    fn from(achievement: &Achievement) -> Self {
        Self {
            id: achievement.id().as_str().to_string(),
            title: achievement.title().to_string(),
            description: achievement.description().to_string(),
            unlocked: achievement.is_unlocked(),
            unlocked_at: achievement.unlocked_at().map(|t| t.to_rfc3339()),
        }
    }
}
