use std::collections::HashMap;

use super::aggregate::Achievement;
use crate::shared::AchievementId;

/// Merge default achievement definitions with persisted unlocked state.
///
/// Definitions are authoritative for title, description, and criteria; only
/// `unlocked`/`unlockedAt` are carried over, matched by id. Persisted
/// achievements with no matching definition are dropped; definitions with no
/// persisted record start locked.
pub fn merge_with_stored(defaults: Vec<Achievement>, stored: &[Achievement]) -> Vec<Achievement> {
    let by_id: HashMap<&AchievementId, &Achievement> =
        stored.iter().map(|s| (s.id(), s)).collect();

    defaults
        .into_iter()
        .map(|mut definition| {
            if let Some(stored) = by_id.get(definition.id()) {
                definition.adopt_unlock_state(stored);
            }
            definition
        })
        .collect()
}
