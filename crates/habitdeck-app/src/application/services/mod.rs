mod achievement_service;
mod habit_service;


pub use achievement_service::AchievementService;
pub use habit_service::{HabitService, TapReport};
