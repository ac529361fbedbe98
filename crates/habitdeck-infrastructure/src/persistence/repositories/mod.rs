mod achievement_repo;
mod habit_repo;

pub use achievement_repo::JsonAchievementRepository;
pub use habit_repo::JsonHabitRepository;
