use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{errors::AppResult, models::domain::UserProfile, repositories::UserRepository};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Fetches every profile and drops the current user's own entry.
    pub async fn fetch_display_list(&self, current_user_id: &str) -> AppResult<Vec<UserProfile>> {
        let profiles = self.repository.fetch_all().await?;
        Ok(display_users(&profiles, current_user_id))
    }
}

/// Profiles to show on the social screen: everyone except the current
/// user. Exclusion compares the profile's own userId field, not its
/// storage key; the two usually carry the same value but only the field
/// is authoritative.
pub fn display_users(
    profiles: &BTreeMap<String, UserProfile>,
    current_user_id: &str,
) -> Vec<UserProfile> {
    profiles
        .values()
        .filter(|profile| !profile.is_current_user(current_user_id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::profile_collection;

    #[test]
    fn test_current_user_is_excluded_exactly_once() {
        let profiles = profile_collection(&[("u1", "A"), ("u2", "B"), ("u3", "C")]);

        let displayed = display_users(&profiles, "A");

        assert_eq!(displayed.len(), 2);
        assert!(displayed.iter().all(|p| !p.is_current_user("A")));
    }

    #[test]
    fn test_absent_current_user_excludes_nobody() {
        let profiles = profile_collection(&[("u1", "A"), ("u2", "B")]);

        let displayed = display_users(&profiles, "Z");
        assert_eq!(displayed.len(), 2);
    }

    #[test]
    fn test_empty_collection_gives_empty_list() {
        let displayed = display_users(&BTreeMap::new(), "A");
        assert!(displayed.is_empty());
    }

    #[test]
    fn test_filter_scenario_keeps_the_other_user() {
        let profiles = profile_collection(&[("u1", "A"), ("u2", "B")]);

        let displayed = display_users(&profiles, "A");

        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].user_id.as_deref(), Some("B"));
    }

    #[test]
    fn test_exclusion_uses_the_field_not_the_storage_key() {
        // Storage key says "u1" but the profile's own field says "A";
        // only the field counts.
        let profiles = profile_collection(&[("u1", "A")]);

        assert!(display_users(&profiles, "u1").len() == 1);
        assert!(display_users(&profiles, "A").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let profiles = profile_collection(&[("u1", "A"), ("u2", "B")]);

        assert_eq!(display_users(&profiles, "A"), display_users(&profiles, "A"));
    }
}
