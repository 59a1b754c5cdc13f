use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user profile as stored. `user_id` is the profile's own identifier
/// field; it usually matches the storage key but only the field is
/// authoritative for self-exclusion.
#[derive(Clone, Debug, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub desc: Option<String>,
    pub profile_pic_uri: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn is_current_user(&self, current_user_id: &str) -> bool {
        self.user_id.as_deref() == Some(current_user_id)
    }

    /// Display name with the email as fallback for profiles created
    /// before the name field existed.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("(unnamed)")
    }
}
