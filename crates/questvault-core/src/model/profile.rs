//! User identity as supplied by the login integration.

use questvault_logic::validate;
use serde::{Deserialize, Serialize};

/// Identity of the current user. The core never creates one of these on its
/// own — the identity capability hands it over after login (real or demo),
/// and the store merely keeps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Stable, unique user key from the identity platform.
    pub user_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

impl Profile {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            picture_url: None,
            status_message: None,
        }
    }

    pub fn with_picture(mut self, url: impl Into<String>) -> Self {
        self.picture_url = Some(url.into());
        self
    }

    pub fn with_status(mut self, message: impl Into<String>) -> Self {
        self.status_message = Some(message.into());
        self
    }

    /// Shape check used when restoring a persisted snapshot.
    pub fn is_valid(&self) -> bool {
        validate::valid_user_id(&self.user_id) && validate::valid_display_name(&self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let profile = Profile::new("u1", "Alice")
            .with_picture("https://example.com/a.png")
            .with_status("saving up");
        assert_eq!(profile.user_id, "u1");
        assert_eq!(profile.picture_url.as_deref(), Some("https://example.com/a.png"));
        assert_eq!(profile.status_message.as_deref(), Some("saving up"));
    }

    #[test]
    fn test_validity() {
        assert!(Profile::new("u1", "Alice").is_valid());
        assert!(!Profile::new("", "Alice").is_valid());
        assert!(!Profile::new("u1", "  ").is_valid());
    }

    #[test]
    fn test_camel_case_wire_format() {
        let json = serde_json::to_string(&Profile::new("u1", "Alice")).unwrap();
        assert!(json.contains("\"userId\""));
        assert!(json.contains("\"displayName\""));
        // Optional fields stay off the wire when unset.
        assert!(!json.contains("pictureUrl"));
    }
}
