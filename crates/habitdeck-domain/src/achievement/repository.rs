use async_trait::async_trait;

use super::aggregate::Achievement;
use crate::shared::DomainError;

/// Achievement repository trait. The whole list is one stored blob, like
/// the habit list.
#[async_trait]
pub trait AchievementRepository: Send + Sync {
    /// Load the persisted achievement list. An absent blob is an empty list.
    async fn find_all(&self) -> Result<Vec<Achievement>, DomainError>;

    /// Persist the full achievement list.
    async fn save_all(&self, achievements: &[Achievement]) -> Result<(), DomainError>;
}
