// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod achievement;
pub mod events;
pub mod habit;
pub mod notification;
pub mod shared;

// Re-exports for convenience
pub use events::{DomainEvent, EventBus};
pub use shared::{AchievementId, DomainError, HabitId};
