use std::sync::Arc;

use habitdeck_domain::habit::{ActionType, Frequency, Habit, HabitRepository, Measurement};
use habitdeck_infrastructure::persistence::{JsonHabitRepository, JsonStore};

fn sample_habit(title: &str) -> Habit {
    Habit::new(
        title.to_string(),
        ActionType::Do,
        Frequency::Daily { repeats: 1 },
        Measurement::Checkbox { target: 1 },
        "#4CAF50".to_string(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_find_all_on_empty_store_returns_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonHabitRepository::new(Arc::new(JsonStore::new(dir.path())));

    let habits = repo.find_all().await.unwrap();
    assert!(habits.is_empty());
}

#[tokio::test]
async fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonStore::new(dir.path()));
    let repo = JsonHabitRepository::new(store.clone());

    let mut habit = sample_habit("Read 15 minutes");
    let today = "2024-01-10".parse().unwrap();
    let yesterday = "2024-01-09".parse().unwrap();
    habit.tap(today, yesterday);

    repo.save_all(&[habit.clone()]).await.unwrap();

    // A fresh repository over the same store sees the same data.
    let reloaded = JsonHabitRepository::new(store).find_all().await.unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].id(), habit.id());
    assert_eq!(reloaded[0].streak(), 1);
    assert_eq!(reloaded[0].progress_on(today), 1);
    assert_eq!(reloaded[0].last_completed_date(), Some(today));
}

#[tokio::test]
async fn test_save_all_replaces_previous_blob() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonStore::new(dir.path()));
    let repo = JsonHabitRepository::new(store);

    repo.save_all(&[sample_habit("A"), sample_habit("B")])
        .await
        .unwrap();
    repo.save_all(&[sample_habit("C")]).await.unwrap();

    let habits = repo.find_all().await.unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].title(), "C");
}

#[tokio::test]
async fn test_malformed_blob_is_a_deserialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonStore::new(dir.path()));
    store.save("my-habits-data", "not json at all").await.unwrap();

    let repo = JsonHabitRepository::new(store);
    let result = repo.find_all().await;

    assert!(matches!(
        result,
        Err(habitdeck_domain::shared::DomainError::Deserialization(_))
    ));
}
