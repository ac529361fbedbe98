use async_trait::async_trait;
use std::sync::Arc;

use habitdeck_domain::habit::{Habit, HabitRepository};
use habitdeck_domain::shared::DomainError;

use crate::config::HABITS_KEY;
use crate::persistence::store::JsonStore;

/// JSON blob implementation of HabitRepository
pub struct JsonHabitRepository {
    store: Arc<JsonStore>,
}

impl JsonHabitRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HabitRepository for JsonHabitRepository {
    async fn find_all(&self) -> Result<Vec<Habit>, DomainError> {
        let Some(raw) = self.store.load(HABITS_KEY).await? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|e| {
            DomainError::Deserialization(format!("Malformed habits blob: {e}"))
        })
    }

    async fn save_all(&self, habits: &[Habit]) -> Result<(), DomainError> {
        let raw = serde_json::to_string(habits)
            .map_err(|e| DomainError::Serialization(format!("Failed to encode habits: {e}")))?;
        self.store.save(HABITS_KEY, &raw).await
    }
}
