// Application layer - services, queries, DTOs, and the composition root

pub mod application;
pub mod bootstrap;

pub use application::services::{AchievementService, HabitService};
pub use application::state::AppState;
pub use bootstrap::{bootstrap, AppContext};
