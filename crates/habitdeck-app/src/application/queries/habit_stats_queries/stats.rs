use crate::application::dtos::HabitStatsDto;

use super::types::Contribution;

/// Derive summary statistics from a contribution sequence.
///
/// Streaks here run over the *entries present in the sequence*, not over
/// calendar days: a sparse map (say, only the days a counter habit was
/// touched) yields runs of adjacent entries. This is a weaker notion than
/// the per-habit streak counter kept by the streak engine, and the two are
/// deliberately not unified because the UI surfaces both.
pub fn compute_stats(contributions: &[Contribution]) -> HabitStatsDto {
    if contributions.is_empty() {
        return HabitStatsDto::default();
    }

    let mut sorted = contributions.to_vec();
    sorted.sort_by_key(|c| c.date);

    let total_days = sorted.len() as u32;
    let completed_days = sorted.iter().filter(|c| c.count > 0).count() as u32;
    let total_checks: u64 = sorted.iter().map(|c| u64::from(c.count)).sum();
    let percent =
        (f64::from(completed_days) / f64::from(total_days.max(1)) * 100.0).round() as u32;

    let mut best_streak = 0u32;
    let mut running = 0u32;
    for contribution in &sorted {
        if contribution.count > 0 {
            running += 1;
            best_streak = best_streak.max(running);
        } else {
            running = 0;
        }
    }

    // Trailing run of completed entries; 0 if the last entry is empty.
    let current_streak = sorted
        .iter()
        .rev()
        .take_while(|c| c.count > 0)
        .count() as u32;

    HabitStatsDto {
        total_days,
        completed_days,
        total_checks,
        percent,
        best_streak,
        current_streak,
    }
}
