use chrono::{DateTime, Utc};
use tracing::debug;

use super::aggregate::Achievement;
use super::value_objects::Criterion;
use crate::habit::Habit;
use crate::shared::HabitId;

/// Result of one evaluation pass.
#[derive(Debug, Clone)]
pub struct EvaluationOutcome {
    /// The full achievement list, for persistence and display.
    pub updated: Vec<Achievement>,
    /// Exactly the achievements whose unlocked state flipped this call.
    pub newly_unlocked: Vec<Achievement>,
}

/// Evaluate every still-locked achievement against the current habits.
///
/// Already-unlocked achievements are never re-evaluated: the unlock
/// transition is monotonic even if habits later regress below the
/// threshold.
pub fn evaluate(
    habits: &[Habit],
    achievements: Vec<Achievement>,
    now: DateTime<Utc>,
) -> EvaluationOutcome {
    let mut newly_unlocked = Vec::new();

    let updated: Vec<Achievement> = achievements
        .into_iter()
        .map(|mut achievement| {
            if achievement.is_unlocked() {
                return achievement;
            }

            if criterion_met(achievement.criteria(), habits) {
                achievement.unlock(now);
                debug!(
                    achievement_id = %achievement.id(),
                    title = achievement.title(),
                    "achievement unlocked"
                );
                newly_unlocked.push(achievement.clone());
            }

            achievement
        })
        .collect();

    EvaluationOutcome {
        updated,
        newly_unlocked,
    }
}

fn criterion_met(criteria: &Criterion, habits: &[Habit]) -> bool {
    match criteria {
        Criterion::TotalChecks { value, habit_id } => {
            let total: u64 = match habit_id {
                Some(id) => find_habit(habits, id).map(Habit::total_checks).unwrap_or(0),
                None => habits.iter().map(Habit::total_checks).sum(),
            };
            total >= u64::from(*value)
        }
        Criterion::CurrentStreak { value, habit_id } => match habit_id {
            Some(id) => find_habit(habits, id).is_some_and(|h| h.streak() >= *value),
            None => habits.iter().any(|h| h.streak() >= *value),
        },
        Criterion::CompletedDays { value, habit_id } => match habit_id {
            Some(id) => find_habit(habits, id).is_some_and(|h| h.completed_days() >= *value),
            None => habits.iter().any(|h| h.completed_days() >= *value),
        },
        Criterion::PercentComplete { value } => {
            habits.iter().any(|h| h.percent_complete() >= *value)
        }
    }
}

fn find_habit<'a>(habits: &'a [Habit], id: &HabitId) -> Option<&'a Habit> {
    habits.iter().find(|h| h.id() == id)
}
