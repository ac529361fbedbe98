use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use habitdeck_domain::habit::Habit;

/// Habit row as the dashboard shows it for a given day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitDto {
    pub id: String,
    pub title: String,
    pub color: String,
    pub is_counter: bool,
    pub target: u32,
    pub progress_today: u32,
    pub completed_today: bool,
    pub streak: u32,
}

impl HabitDto {
    pub fn from_habit(habit: &Habit, today: NaiveDate) -> Self {
        let progress_today = habit.progress_on(today);
        Self {
            id: habit.id().as_str().to_string(),
            title: habit.title().to_string(),
            color: habit.color().to_string(),
            is_counter: habit.measurement().is_counter(),
            target: habit.target(),
            progress_today,
            completed_today: progress_today >= habit.target(),
            streak: habit.streak(),
        }
    }
}
