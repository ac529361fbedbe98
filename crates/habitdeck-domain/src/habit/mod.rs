mod aggregate;
mod repository;
pub mod streak;
mod value_objects;

#[cfg(test)]
mod streak_test;
#[cfg(test)]
mod value_objects_test;

pub use aggregate::{Habit, TapOutcome};
pub use repository::HabitRepository;
pub use streak::StreakUpdate;
pub use value_objects::{ActionType, Frequency, Measurement};
