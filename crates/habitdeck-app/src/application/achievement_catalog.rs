use habitdeck_domain::achievement::Achievement;
use habitdeck_domain::shared::DomainError;

/// Built-in achievement definitions shipped with the app.
///
/// These are authoritative for titles, descriptions, and criteria; the
/// persisted blob only contributes unlocked state (see
/// `achievement::merge_with_stored`).
pub fn builtin_achievements() -> Result<Vec<Achievement>, DomainError> {
    const RAW_CATALOG: &str =
        include_str!("../../../../config/achievements/builtin_achievements.json");
    serde_json::from_str(RAW_CATALOG).map_err(|e| {
        DomainError::Deserialization(format!("Failed to parse builtin achievements: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_parses_and_starts_locked() {
        let catalog = builtin_achievements().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.iter().all(|a| !a.is_unlocked()));
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = builtin_achievements().unwrap();
        let ids: HashSet<&str> = catalog.iter().map(|a| a.id().as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }
}
