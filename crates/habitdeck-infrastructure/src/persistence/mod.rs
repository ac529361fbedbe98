pub mod repositories;
mod result_ext;
mod store;

pub use repositories::{JsonAchievementRepository, JsonHabitRepository};
pub use result_ext::ResultExt;
pub use store::JsonStore;
