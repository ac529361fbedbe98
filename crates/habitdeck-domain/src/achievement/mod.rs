mod aggregate;
pub mod evaluator;
mod merge;
mod repository;
mod value_objects;


pub use aggregate::Achievement;
pub use evaluator::{evaluate, EvaluationOutcome};
pub use merge::merge_with_stored;
pub use repository::AchievementRepository;
pub use value_objects::Criterion;
