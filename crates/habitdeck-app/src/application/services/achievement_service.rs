use chrono::Utc;
use log::{error, info, warn};
use std::sync::Arc;

use habitdeck_domain::achievement::{
    evaluate, merge_with_stored, Achievement, AchievementRepository, EvaluationOutcome,
};
use habitdeck_domain::events::{AchievementUnlocked, AchievementsUpdated, EventBus};
use habitdeck_domain::habit::Habit;
use habitdeck_domain::notification::{NotificationMessage, NotificationSender};
use habitdeck_domain::shared::DomainError;

use crate::application::achievement_catalog;

/// Achievement application service.
///
/// Owns the evaluate-and-notify pipeline: load persisted state, merge with
/// the built-in definitions, evaluate against the habits, persist, announce
/// on the bus, and surface device notifications for fresh unlocks. Every
/// side effect past the evaluation itself is best-effort: a failed write,
/// publish, or notification is logged and never aborts the pipeline.
pub struct AchievementService {
    achievement_repo: Arc<dyn AchievementRepository>,
    event_bus: Arc<dyn EventBus>,
    notifier: Arc<dyn NotificationSender>,
}

impl AchievementService {
    pub fn new(
        achievement_repo: Arc<dyn AchievementRepository>,
        event_bus: Arc<dyn EventBus>,
        notifier: Arc<dyn NotificationSender>,
    ) -> Self {
        Self {
            achievement_repo,
            event_bus,
            notifier,
        }
    }

    /// Run one evaluation pass over `habits`.
    ///
    /// Returns the full updated list and exactly the achievements whose
    /// unlocked state flipped during this call.
    pub async fn evaluate_and_notify(
        &self,
        habits: &[Habit],
    ) -> Result<EvaluationOutcome, DomainError> {
        let merged = self.load_merged().await?;
        let outcome = evaluate(habits, merged, Utc::now());

        if let Err(e) = self.achievement_repo.save_all(&outcome.updated).await {
            warn!("[achievements] failed to persist evaluation result: {e}");
        }

        let publish_result = self
            .event_bus
            .publish(Box::new(AchievementsUpdated {
                achievements: outcome.updated.clone(),
                occurred_at: Utc::now(),
            }))
            .await;
        if let Err(e) = publish_result {
            warn!("[achievements] failed to publish update event: {e}");
        }

        if !outcome.newly_unlocked.is_empty() {
            info!(
                "[achievements] newly unlocked: {}",
                outcome
                    .newly_unlocked
                    .iter()
                    .map(|a| a.id().as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            self.announce_unlocked(&outcome.newly_unlocked).await;
        }

        Ok(outcome)
    }

    /// Current achievement list for display: built-in definitions merged
    /// with whatever unlock state is persisted.
    pub async fn current(&self) -> Result<Vec<Achievement>, DomainError> {
        self.load_merged().await
    }

    async fn load_merged(&self) -> Result<Vec<Achievement>, DomainError> {
        let defaults = achievement_catalog::builtin_achievements()?;

        // An unreadable or malformed blob degrades to the locked defaults.
        let stored = match self.achievement_repo.find_all().await {
            Ok(stored) => stored,
            Err(e) if e.is_recoverable() => {
                warn!("[achievements] stored blob unreadable, starting from defaults: {e}");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        Ok(merge_with_stored(defaults, &stored))
    }

    async fn announce_unlocked(&self, newly_unlocked: &[Achievement]) {
        for achievement in newly_unlocked {
            let publish_result = self
                .event_bus
                .publish(Box::new(AchievementUnlocked {
                    achievement_id: achievement.id().clone(),
                    title: achievement.title().to_string(),
                    occurred_at: Utc::now(),
                }))
                .await;
            if let Err(e) = publish_result {
                warn!(
                    "[achievements] failed to publish unlock event for {}: {e}",
                    achievement.id()
                );
            }
        }

        let granted = match self.notifier.ensure_permission().await {
            Ok(granted) => granted,
            Err(e) => {
                warn!("[achievements] permission request failed: {e}");
                false
            }
        };
        if !granted {
            info!("[achievements] notification permission not granted, skipping notifications");
            return;
        }

        for achievement in newly_unlocked {
            let message = NotificationMessage::new(
                format!("Achievement: {}", achievement.title()),
                achievement.description(),
            )
            .for_achievement(achievement.id().clone());

            if let Err(e) = self.notifier.schedule(&message).await {
                error!(
                    "[achievements] failed to schedule notification for {}: {e}",
                    achievement.id()
                );
            }
        }
    }
}
