use std::sync::{PoisonError, RwLock};

use habitdeck_domain::achievement::Achievement;
use habitdeck_domain::shared::DomainError;

use super::services::AchievementService;

/// Process-wide UI state with an explicit lifecycle.
///
/// Constructed once by the composition root and passed by reference to
/// whatever presents it; there is no hidden singleton. The achievement
/// snapshot is refreshed on demand or by the bus subscription the
/// composition root installs.
pub struct AppState {
    achievements: RwLock<Vec<Achievement>>,
    edit_mode: RwLock<bool>,
}

impl AppState {
    pub fn new(achievements: Vec<Achievement>) -> Self {
        Self {
            achievements: RwLock::new(achievements),
            edit_mode: RwLock::new(false),
        }
    }

    pub fn achievements(&self) -> Vec<Achievement> {
        self.achievements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_achievements(&self, achievements: Vec<Achievement>) {
        *self
            .achievements
            .write()
            .unwrap_or_else(PoisonError::into_inner) = achievements;
    }

    /// Re-read the merged achievement list from the service.
    pub async fn refresh_achievements(
        &self,
        service: &AchievementService,
    ) -> Result<(), DomainError> {
        let current = service.current().await?;
        self.set_achievements(current);
        Ok(())
    }

    pub fn is_edit_mode(&self) -> bool {
        *self
            .edit_mode
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_edit_mode(&self, enabled: bool) {
        *self
            .edit_mode
            .write()
            .unwrap_or_else(PoisonError::into_inner) = enabled;
    }
}
