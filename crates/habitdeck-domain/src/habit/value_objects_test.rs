#[cfg(test)]
mod tests {
    use super::super::value_objects::*;

    #[test]
    fn test_checkbox_target_is_always_one() {
        let measurement = Measurement::Checkbox { target: 1 };
        assert_eq!(measurement.target(), 1);
        assert!(!measurement.is_counter());
    }

    #[test]
    fn test_counter_target_is_explicit() {
        let measurement = Measurement::Counter { target: 8 };
        assert_eq!(measurement.target(), 8);
        assert!(measurement.is_counter());
    }

    #[test]
    fn test_measurement_tag_round_trip() {
        let json = r#"{"type":"counter","target":3}"#;
        let measurement: Measurement = serde_json::from_str(json).unwrap();
        assert_eq!(measurement, Measurement::Counter { target: 3 });

        let back = serde_json::to_string(&measurement).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_checkbox_target_defaults_when_absent() {
        let measurement: Measurement = serde_json::from_str(r#"{"type":"checkbox"}"#).unwrap();
        assert_eq!(measurement.target(), 1);
    }

    #[test]
    fn test_frequency_tags() {
        let daily: Frequency = serde_json::from_str(r#"{"type":"daily","repeats":1}"#).unwrap();
        assert_eq!(daily, Frequency::Daily { repeats: 1 });

        let weekly: Frequency =
            serde_json::from_str(r#"{"type":"weekly","days":[1,3,5]}"#).unwrap();
        assert_eq!(
            weekly,
            Frequency::Weekly {
                days: vec![1, 3, 5]
            }
        );
    }

    #[test]
    fn test_action_type_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&ActionType::DontDo).unwrap(),
            "\"dont_do\""
        );
        let parsed: ActionType = serde_json::from_str("\"do\"").unwrap();
        assert_eq!(parsed, ActionType::Do);
    }
}
