use async_trait::async_trait;
use std::sync::Arc;

use habitdeck_domain::achievement::{Achievement, AchievementRepository};
use habitdeck_domain::shared::DomainError;

use crate::config::ACHIEVEMENTS_KEY;
use crate::persistence::store::JsonStore;

/// JSON blob implementation of AchievementRepository
pub struct JsonAchievementRepository {
    store: Arc<JsonStore>,
}

impl JsonAchievementRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AchievementRepository for JsonAchievementRepository {
    async fn find_all(&self) -> Result<Vec<Achievement>, DomainError> {
        let Some(raw) = self.store.load(ACHIEVEMENTS_KEY).await? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|e| {
            DomainError::Deserialization(format!("Malformed achievements blob: {e}"))
        })
    }

    async fn save_all(&self, achievements: &[Achievement]) -> Result<(), DomainError> {
        let raw = serde_json::to_string(achievements).map_err(|e| {
            DomainError::Serialization(format!("Failed to encode achievements: {e}"))
        })?;
        self.store.save(ACHIEVEMENTS_KEY, &raw).await
    }
}
