use serde::{Deserialize, Serialize};

/// Summary statistics over a contribution sequence.
///
/// Both streak fields here count consecutive *recorded* entries, not
/// calendar days; see the stats query module for the distinction from the
/// habit's own streak counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitStatsDto {
    pub total_days: u32,
    pub completed_days: u32,
    pub total_checks: u64,
    pub percent: u32,
    pub best_streak: u32,
    pub current_streak: u32,
}

/// One cell of the dashboard heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCellDto {
    pub date: String, // YYYY-MM-DD
    pub count: u32,
    /// Display intensity, 0 (empty) through 4 (densest).
    pub level: u8,
}
