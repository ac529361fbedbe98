use std::sync::Arc;

use habitdeck_domain::achievement::AchievementRepository;
use habitdeck_domain::events::{AchievementsUpdated, EventBus};
use habitdeck_domain::habit::HabitRepository;
use habitdeck_domain::notification::NotificationSender;
use habitdeck_infrastructure::events::InProcessEventBus;
use habitdeck_infrastructure::notification::LocalNotificationSender;
use habitdeck_infrastructure::persistence::{
    JsonAchievementRepository, JsonHabitRepository, JsonStore,
};
use habitdeck_infrastructure::{config, logging};

use crate::application::queries::HabitStatsQueries;
use crate::application::services::{AchievementService, HabitService};
use crate::application::state::AppState;

/// Fully wired application graph.
pub struct AppContext {
    pub habit_service: Arc<HabitService>,
    pub achievement_service: Arc<AchievementService>,
    pub stats_queries: Arc<HabitStatsQueries>,
    pub state: Arc<AppState>,
    pub event_bus: Arc<InProcessEventBus>,
    pub notifier: Arc<LocalNotificationSender>,
}

/// Composition root: logging, default data directory, full service graph.
pub async fn bootstrap() -> anyhow::Result<AppContext> {
    logging::init_logger(config::log_dir()?)?;
    let store = Arc::new(JsonStore::open_default()?);
    bootstrap_with_store(store).await
}

/// Wire the service graph over an existing store. Used directly by tests
/// and by anything embedding the app with its own data directory.
pub async fn bootstrap_with_store(store: Arc<JsonStore>) -> anyhow::Result<AppContext> {
    let habit_repo: Arc<dyn HabitRepository> = Arc::new(JsonHabitRepository::new(store.clone()));
    let achievement_repo: Arc<dyn AchievementRepository> =
        Arc::new(JsonAchievementRepository::new(store));

    let event_bus = Arc::new(InProcessEventBus::new());
    let notifier = Arc::new(LocalNotificationSender::new());

    let achievement_service = Arc::new(AchievementService::new(
        achievement_repo,
        event_bus.clone() as Arc<dyn EventBus>,
        notifier.clone() as Arc<dyn NotificationSender>,
    ));
    let habit_service = Arc::new(HabitService::new(
        habit_repo.clone(),
        achievement_service.clone(),
        event_bus.clone() as Arc<dyn EventBus>,
    ));
    let stats_queries = Arc::new(HabitStatsQueries::new(habit_repo));

    let state = Arc::new(AppState::new(achievement_service.current().await?));

    // Keep the state holder in sync with every evaluation pass.
    {
        let state = state.clone();
        event_bus
            .subscribe(move |event| {
                if let Some(updated) = event.as_any().downcast_ref::<AchievementsUpdated>() {
                    state.set_achievements(updated.achievements.clone());
                }
            })
            .await;
    }

    Ok(AppContext {
        habit_service,
        achievement_service,
        stats_queries,
        state,
        event_bus,
        notifier,
    })
}
