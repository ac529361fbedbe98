use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One (date, count) pair of a habit's progress history, as charts and
/// heatmaps consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub date: NaiveDate,
    pub count: u32,
}
