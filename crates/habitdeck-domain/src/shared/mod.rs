use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn from_string(s: &str) -> Self {
                Self(s.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

define_id!(HabitId);
define_id!(AchievementId);

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Habit not found: {0}")]
    HabitNotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Errors the tap/evaluation pipelines may recover from with defaults.
    ///
    /// A missing or unreadable blob degrades to empty state; anything else
    /// (validation, bad input) is a programming error surfaced to the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DomainError::Repository(_)
                | DomainError::Infrastructure(_)
                | DomainError::Deserialization(_)
                | DomainError::NotFound(_)
        )
    }
}
