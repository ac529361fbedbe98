use chrono::NaiveDate;
use std::collections::BTreeMap;

use habitdeck_domain::habit::Habit;

use super::types::Contribution;

/// One habit's progress map as a chronologically ascending sequence.
pub fn contributions(habit: &Habit) -> Vec<Contribution> {
    habit
        .progress()
        .iter()
        .map(|(date, count)| Contribution {
            date: *date,
            count: *count,
        })
        .collect()
}

/// Union across all habits: for each date present anywhere, the summed
/// count, ascending by date.
pub fn aggregate_contributions(habits: &[Habit]) -> Vec<Contribution> {
    let mut merged: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for habit in habits {
        for (date, count) in habit.progress() {
            *merged.entry(*date).or_insert(0) += count;
        }
    }

    merged
        .into_iter()
        .map(|(date, count)| Contribution { date, count })
        .collect()
}
