use async_trait::async_trait;

use super::aggregate::Habit;
use crate::shared::DomainError;

/// Habit repository trait.
///
/// The habit list is stored as a single blob and accessed with
/// full-read-modify-full-write; there is no per-habit addressing.
#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Load the full habit list.
    async fn find_all(&self) -> Result<Vec<Habit>, DomainError>;

    /// Persist the full habit list, replacing whatever was stored.
    async fn save_all(&self, habits: &[Habit]) -> Result<(), DomainError>;
}
