use chrono::NaiveDate;

/// Result of running the streak engine over a single day's progress change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakUpdate {
    pub streak: u32,
    pub last_completed_date: Option<NaiveDate>,
}

/// Update a habit's streak in response to one day's progress change.
///
/// Only the not-completed -> completed transition acts on the counter.
/// Un-completing a habit never decrements: a banked streak is never rolled
/// back, and toggling a checkbox off and back on within the same day leaves
/// the streak where the first completion put it.
pub fn advance(
    streak: u32,
    last_completed_date: Option<NaiveDate>,
    target: u32,
    previous_progress: u32,
    new_progress: u32,
    today: NaiveDate,
    yesterday: NaiveDate,
) -> StreakUpdate {
    let was_completed = previous_progress >= target;
    let is_now_completed = new_progress >= target;

    if was_completed || !is_now_completed {
        return StreakUpdate {
            streak,
            last_completed_date,
        };
    }

    let streak = match last_completed_date {
        // Continuing a run from yesterday.
        Some(last) if last == yesterday => streak + 1,
        // Re-completing the same day: the streak was already banked.
        Some(last) if last == today => streak,
        // Gap, or the very first completion.
        _ => 1,
    };

    StreakUpdate {
        streak,
        last_completed_date: Some(today),
    }
}
