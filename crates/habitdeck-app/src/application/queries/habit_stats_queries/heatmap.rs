use chrono::{Days, NaiveDate};
use std::collections::HashMap;

use habitdeck_domain::shared::DomainError;

use crate::application::dtos::HeatmapCellDto;

use super::types::Contribution;

/// Display intensity for a day's count, binned 0-4.
fn level(count: u32) -> u8 {
    match count {
        0 => 0,
        1 => 1,
        2 => 2,
        3 => 3,
        _ => 4,
    }
}

/// Dense window of `num_days` cells ending at `end`, zero-filled for days
/// with no contribution. Duplicate dates in the input are summed.
pub fn heatmap_window(
    contributions: &[Contribution],
    end: NaiveDate,
    num_days: u32,
) -> Result<Vec<HeatmapCellDto>, DomainError> {
    if num_days == 0 {
        return Err(DomainError::Validation(
            "Heatmap window must cover at least one day".to_string(),
        ));
    }

    let mut by_date: HashMap<NaiveDate, u32> = HashMap::new();
    for contribution in contributions {
        *by_date.entry(contribution.date).or_insert(0) += contribution.count;
    }

    let start = end
        .checked_sub_days(Days::new(u64::from(num_days) - 1))
        .ok_or_else(|| DomainError::Validation("Heatmap window underflows the calendar".to_string()))?;

    let mut cells = Vec::with_capacity(num_days as usize);
    let mut day = start;
    while day <= end {
        let count = by_date.get(&day).copied().unwrap_or(0);
        cells.push(HeatmapCellDto {
            date: day.format("%Y-%m-%d").to_string(),
            count,
            level: level(count),
        });
        day = day
            .succ_opt()
            .ok_or_else(|| DomainError::Validation("Heatmap window overflows the calendar".to_string()))?;
    }

    Ok(cells)
}
