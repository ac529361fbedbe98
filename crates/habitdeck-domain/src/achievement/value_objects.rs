use serde::{Deserialize, Serialize};

use crate::shared::HabitId;

/// The rule an achievement requires to unlock.
///
/// Tagged exactly like the persisted JSON (`{"type": "totalChecks",
/// "value": 100, "habitId": null}`). An absent or null `habitId` means the
/// criterion ranges over all habits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Criterion {
    #[serde(rename_all = "camelCase")]
    TotalChecks {
        value: u32,
        #[serde(default)]
        habit_id: Option<HabitId>,
    },
    #[serde(rename_all = "camelCase")]
    CurrentStreak {
        value: u32,
        #[serde(default)]
        habit_id: Option<HabitId>,
    },
    #[serde(rename_all = "camelCase")]
    CompletedDays {
        value: u32,
        #[serde(default)]
        habit_id: Option<HabitId>,
    },
    PercentComplete { value: u32 },
}

impl Criterion {
    pub fn value(&self) -> u32 {
        match self {
            Criterion::TotalChecks { value, .. }
            | Criterion::CurrentStreak { value, .. }
            | Criterion::CompletedDays { value, .. }
            | Criterion::PercentComplete { value } => *value,
        }
    }

    pub fn habit_scope(&self) -> Option<&HabitId> {
        match self {
            Criterion::TotalChecks { habit_id, .. }
            | Criterion::CurrentStreak { habit_id, .. }
            | Criterion::CompletedDays { habit_id, .. } => habit_id.as_ref(),
            Criterion::PercentComplete { .. } => None,
        }
    }
}
