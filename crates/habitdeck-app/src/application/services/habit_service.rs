use chrono::{Local, NaiveDate, Utc};
use log::{info, warn};
use std::sync::Arc;

use habitdeck_domain::achievement::EvaluationOutcome;
use habitdeck_domain::events::{EventBus, HabitProgressRecorded};
use habitdeck_domain::habit::{Habit, HabitRepository, TapOutcome};
use habitdeck_domain::shared::{DomainError, HabitId};

use super::achievement_service::AchievementService;
use crate::application::template_library;

/// Everything one tap produced: the habit after mutation plus the
/// achievement evaluation that followed it.
#[derive(Debug)]
pub struct TapReport {
    pub habit: Habit,
    pub outcome: TapOutcome,
    pub achievements: EvaluationOutcome,
}

/// Habit application service.
///
/// One user interaction maps to one full read-modify-write of the habit
/// list. Progress and streak always commit in memory first; persistence
/// and downstream side effects are best-effort.
pub struct HabitService {
    habit_repo: Arc<dyn HabitRepository>,
    achievement_service: Arc<AchievementService>,
    event_bus: Arc<dyn EventBus>,
}

impl HabitService {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        achievement_service: Arc<AchievementService>,
        event_bus: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            habit_repo,
            achievement_service,
            event_bus,
        }
    }

    /// The full habit list. An unreadable store reads as empty.
    pub async fn list_habits(&self) -> Vec<Habit> {
        match self.habit_repo.find_all().await {
            Ok(habits) => habits,
            Err(e) => {
                warn!("[habits] failed to load habits, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Append a new habit and persist the list.
    pub async fn add_habit(&self, habit: Habit) -> Result<(), DomainError> {
        let mut habits = self.list_habits().await;
        info!("[habits] add habit_id={} title={}", habit.id(), habit.title());
        habits.push(habit);
        self.habit_repo.save_all(&habits).await
    }

    /// Create a habit from a built-in template and persist it.
    pub async fn add_from_template(&self, template_id: &str) -> Result<Habit, DomainError> {
        let templates = template_library::builtin_templates()?;
        let template = templates
            .iter()
            .find(|t| t.template_id == template_id)
            .ok_or_else(|| DomainError::NotFound(format!("Unknown template: {template_id}")))?;

        let habit = template.instantiate()?;
        self.add_habit(habit.clone()).await?;
        Ok(habit)
    }

    /// Record one tap on a habit for the local calendar date.
    pub async fn record_tap_today(&self, habit_id: &HabitId) -> Result<TapReport, DomainError> {
        self.record_tap(habit_id, Local::now().date_naive()).await
    }

    /// Record one tap on a habit for `today`: mutate the day's progress,
    /// run the streak engine, persist, then evaluate achievements over the
    /// updated list.
    pub async fn record_tap(
        &self,
        habit_id: &HabitId,
        today: NaiveDate,
    ) -> Result<TapReport, DomainError> {
        let yesterday = today.pred_opt().ok_or_else(|| {
            DomainError::InvalidInput("No calendar day precedes the given date".to_string())
        })?;

        let mut habits = self.list_habits().await;
        let habit = habits
            .iter_mut()
            .find(|h| h.id() == habit_id)
            .ok_or_else(|| DomainError::HabitNotFound(habit_id.to_string()))?;

        let outcome = habit.tap(today, yesterday);
        let snapshot = habit.clone();

        info!(
            "[habits] tap habit_id={} date={} progress {}->{} streak={}",
            habit_id, today, outcome.previous_progress, outcome.new_progress, snapshot.streak()
        );

        // The tap has committed in memory; a failed write is logged and
        // dropped, never surfaced as a tap failure.
        if let Err(e) = self.habit_repo.save_all(&habits).await {
            warn!("[habits] failed to persist tap for {habit_id}: {e}");
        }

        let publish_result = self
            .event_bus
            .publish(Box::new(HabitProgressRecorded {
                habit_id: habit_id.clone(),
                date: today,
                progress: outcome.new_progress,
                streak: snapshot.streak(),
                occurred_at: Utc::now(),
            }))
            .await;
        if let Err(e) = publish_result {
            warn!("[habits] failed to publish progress event: {e}");
        }

        let achievements = self.achievement_service.evaluate_and_notify(&habits).await?;

        Ok(TapReport {
            habit: snapshot,
            outcome,
            achievements,
        })
    }
}
