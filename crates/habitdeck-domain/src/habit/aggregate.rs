use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::streak::{self, StreakUpdate};
use super::value_objects::{ActionType, Frequency, Measurement};
use crate::shared::{DomainError, HabitId};

/// A user-defined recurring action tracked per day.
///
/// Serialized field names match the persisted JSON shape
/// (`actionType`, `lastCompletedDate`, ISO date keys in `progress`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    id: HabitId,
    title: String,
    action_type: ActionType,
    frequency: Frequency,
    measurement: Measurement,
    #[serde(default)]
    progress: BTreeMap<NaiveDate, u32>,
    #[serde(default)]
    streak: u32,
    color: String,
    #[serde(default)]
    last_completed_date: Option<NaiveDate>,
}

/// What a single tap did to the habit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapOutcome {
    pub previous_progress: u32,
    pub new_progress: u32,
    /// True when the tap crossed the not-completed -> completed threshold.
    pub completed: bool,
}

impl Habit {
    pub fn new(
        title: String,
        action_type: ActionType,
        frequency: Frequency,
        measurement: Measurement,
        color: String,
    ) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::Validation(
                "Habit title cannot be empty".to_string(),
            ));
        }

        if let Measurement::Counter { target } = measurement {
            if target == 0 {
                return Err(DomainError::Validation(
                    "Counter target must be positive".to_string(),
                ));
            }
        }

        Ok(Self {
            id: HabitId::new(),
            title: title.trim().to_string(),
            action_type,
            frequency,
            measurement,
            progress: BTreeMap::new(),
            streak: 0,
            color,
            last_completed_date: None,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: HabitId,
        title: String,
        action_type: ActionType,
        frequency: Frequency,
        measurement: Measurement,
        progress: BTreeMap<NaiveDate, u32>,
        streak: u32,
        color: String,
        last_completed_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            title,
            action_type,
            frequency,
            measurement,
            progress,
            streak,
            color,
            last_completed_date,
        }
    }

    pub fn id(&self) -> &HabitId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn action_type(&self) -> ActionType {
        self.action_type
    }

    pub fn frequency(&self) -> &Frequency {
        &self.frequency
    }

    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    pub fn progress(&self) -> &BTreeMap<NaiveDate, u32> {
        &self.progress
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn last_completed_date(&self) -> Option<NaiveDate> {
        self.last_completed_date
    }

    pub fn target(&self) -> u32 {
        self.measurement.target()
    }

    pub fn progress_on(&self, date: NaiveDate) -> u32 {
        self.progress.get(&date).copied().unwrap_or(0)
    }

    /// Next progress value for a tap on `date`: checkbox toggles 0 <-> 1,
    /// counter increments and saturates at the target.
    pub fn next_progress(&self, date: NaiveDate) -> u32 {
        let current = self.progress_on(date);
        match self.measurement {
            Measurement::Checkbox { .. } => {
                if current >= 1 {
                    0
                } else {
                    1
                }
            }
            Measurement::Counter { target } => {
                if current < target {
                    current + 1
                } else {
                    current
                }
            }
        }
    }

    /// Record one tap for `today`: mutate the day's progress and run the
    /// streak engine over the transition.
    pub fn tap(&mut self, today: NaiveDate, yesterday: NaiveDate) -> TapOutcome {
        let previous = self.progress_on(today);
        let next = self.next_progress(today);

        let StreakUpdate {
            streak,
            last_completed_date,
        } = streak::advance(
            self.streak,
            self.last_completed_date,
            self.target(),
            previous,
            next,
            today,
            yesterday,
        );

        self.progress.insert(today, next);
        self.streak = streak;
        self.last_completed_date = last_completed_date;

        TapOutcome {
            previous_progress: previous,
            new_progress: next,
            completed: previous < self.target() && next >= self.target(),
        }
    }

    /// Sum of all recorded progress values across all days.
    pub fn total_checks(&self) -> u64 {
        self.progress.values().map(|v| u64::from(*v)).sum()
    }

    /// Number of days with any progress recorded.
    pub fn completed_days(&self) -> u32 {
        self.progress.values().filter(|v| **v > 0).count() as u32
    }

    /// Completed days as a percentage of all recorded days, rounded.
    /// The divisor is floored at 1 so an empty map yields 0 instead of NaN.
    pub fn percent_complete(&self) -> u32 {
        let days = self.progress.len().max(1) as f64;
        let completed = f64::from(self.completed_days());
        (completed / days * 100.0).round() as u32
    }
}
