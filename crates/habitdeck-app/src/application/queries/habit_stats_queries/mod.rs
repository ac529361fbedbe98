use chrono::NaiveDate;
use log::info;
use std::sync::Arc;

use habitdeck_domain::habit::HabitRepository;
use habitdeck_domain::shared::{DomainError, HabitId};

use crate::application::dtos::{HabitStatsDto, HeatmapCellDto};

mod contributions;
mod heatmap;
mod stats;
mod types;

#[cfg(test)]
mod stats_test;

pub use contributions::{aggregate_contributions, contributions};
pub use heatmap::heatmap_window;
pub use stats::compute_stats;
pub use types::Contribution;

/// Read-side queries for the statistics screen.
pub struct HabitStatsQueries {
    habit_repo: Arc<dyn HabitRepository>,
}

impl HabitStatsQueries {
    pub fn new(habit_repo: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repo }
    }

    /// Contribution sequence for one habit.
    pub async fn habit_contributions(
        &self,
        habit_id: &HabitId,
    ) -> Result<Vec<Contribution>, DomainError> {
        let habit = self.find_habit(habit_id).await?;
        Ok(contributions(&habit))
    }

    /// Summary statistics for one habit.
    pub async fn habit_stats(&self, habit_id: &HabitId) -> Result<HabitStatsDto, DomainError> {
        let habit = self.find_habit(habit_id).await?;
        let stats = compute_stats(&contributions(&habit));

        info!(
            "[stats] habit_id={} days={} completed={} best={} current={}",
            habit_id, stats.total_days, stats.completed_days, stats.best_streak,
            stats.current_streak
        );

        Ok(stats)
    }

    /// Summary statistics over the union of all habits.
    pub async fn aggregate_stats(&self) -> Result<HabitStatsDto, DomainError> {
        let habits = self.habit_repo.find_all().await?;
        Ok(compute_stats(&aggregate_contributions(&habits)))
    }

    /// Heatmap cells for one habit, or for all habits when `habit_id`
    /// is absent.
    pub async fn heatmap(
        &self,
        habit_id: Option<&HabitId>,
        end: NaiveDate,
        num_days: u32,
    ) -> Result<Vec<HeatmapCellDto>, DomainError> {
        let values = match habit_id {
            Some(id) => contributions(&self.find_habit(id).await?),
            None => aggregate_contributions(&self.habit_repo.find_all().await?),
        };
        heatmap_window(&values, end, num_days)
    }

    async fn find_habit(
        &self,
        habit_id: &HabitId,
    ) -> Result<habitdeck_domain::habit::Habit, DomainError> {
        self.habit_repo
            .find_all()
            .await?
            .into_iter()
            .find(|h| h.id() == habit_id)
            .ok_or_else(|| DomainError::HabitNotFound(habit_id.to_string()))
    }
}
