use serde::Deserialize;

use habitdeck_domain::habit::{ActionType, Frequency, Habit, Measurement};
use habitdeck_domain::shared::DomainError;

/// Preinstalled habit preset offered by the create flow.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitTemplate {
    pub template_id: String,
    pub title: String,
    pub action_type: ActionType,
    pub frequency: Frequency,
    pub measurement: Measurement,
    pub color: Option<String>,
    pub description: Option<String>,
}

const DEFAULT_COLOR: &str = "#4CAF50";

impl HabitTemplate {
    /// Create a fresh habit from this template: new id, zero streak,
    /// empty progress.
    pub fn instantiate(&self) -> Result<Habit, DomainError> {
        Habit::new(
            self.title.clone(),
            self.action_type,
            self.frequency.clone(),
            self.measurement.clone(),
            self.color
                .clone()
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        )
    }
}

/// Built-in template library.
pub fn builtin_templates() -> Result<Vec<HabitTemplate>, DomainError> {
    const RAW_TEMPLATES: &str = include_str!("../../../../config/templates/builtin_templates.json");
    serde_json::from_str(RAW_TEMPLATES).map_err(|e| {
        DomainError::Deserialization(format!("Failed to parse builtin templates: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_parses() {
        let templates = builtin_templates().unwrap();
        assert!(templates.len() >= 5);
    }

    #[test]
    fn test_instantiate_produces_fresh_habit() {
        let templates = builtin_templates().unwrap();
        let water = templates
            .iter()
            .find(|t| t.template_id == "water_8")
            .unwrap();

        let habit = water.instantiate().unwrap();
        assert_eq!(habit.title(), "Water - 8 glasses");
        assert_eq!(habit.target(), 8);
        assert_eq!(habit.streak(), 0);
        assert!(habit.progress().is_empty());

        // Each instantiation gets its own id.
        let again = water.instantiate().unwrap();
        assert_ne!(habit.id(), again.id());
    }
}
