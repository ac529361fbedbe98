mod achievement_dto;
mod habit_dto;
mod stats_dto;

pub use achievement_dto::AchievementDto;
pub use habit_dto::HabitDto;
pub use stats_dto::{HabitStatsDto, HeatmapCellDto};
