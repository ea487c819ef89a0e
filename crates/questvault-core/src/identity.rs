//! Chat-platform identity capability.
//!
//! The real login integration lives outside this crate; the core only
//! defines the seam it plugs into and a demo stand-in that works offline.
//! The single store mutation the identity layer is expected to perform is
//! pushing its profile in via [`sync_profile`].

use crate::demo;
use crate::model::Profile;
use crate::store::AppStore;

/// Errors an identity operation can report. The store never sees these;
/// they stay between the provider and its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The provider has not finished initializing.
    NotInitialized,
    /// The operation only works inside the host chat app.
    NotInHostApp,
    /// Provider-specific failure.
    Failed(String),
}

impl std::fmt::Display for IdentityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentityError::NotInitialized => write!(f, "identity provider not initialized"),
            IdentityError::NotInHostApp => write!(f, "only available inside the host app"),
            IdentityError::Failed(reason) => write!(f, "identity operation failed: {}", reason),
        }
    }
}

impl std::error::Error for IdentityError {}

/// Seam for the chat-platform login/profile/share integration.
pub trait IdentityProvider {
    fn initialized(&self) -> bool;
    fn logged_in(&self) -> bool;
    /// Profile of the logged-in user, `None` when logged out.
    fn profile(&self) -> Option<&Profile>;
    /// Whether we are running embedded in the host chat app.
    fn in_host_app(&self) -> bool;
    fn last_error(&self) -> Option<&str>;

    fn login(&mut self) -> Result<(), IdentityError>;
    fn logout(&mut self) -> Result<(), IdentityError>;
    /// Share a message through the host platform's picker.
    fn share(&mut self, message: &str) -> Result<(), IdentityError>;
}

/// Offline stand-in used when demo mode is active: always initialized,
/// starts logged in as the demo adventurer, and records shares instead of
/// sending them anywhere.
pub struct DemoIdentity {
    profile: Profile,
    logged_in: bool,
    shared: Vec<String>,
}

impl DemoIdentity {
    pub fn new() -> Self {
        Self {
            profile: demo::demo_profile(),
            logged_in: true,
            shared: Vec::new(),
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Messages "shared" so far, for inspection.
    pub fn shared_messages(&self) -> &[String] {
        &self.shared
    }
}

impl Default for DemoIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for DemoIdentity {
    fn initialized(&self) -> bool {
        true
    }

    fn logged_in(&self) -> bool {
        self.logged_in
    }

    fn profile(&self) -> Option<&Profile> {
        if self.logged_in {
            Some(&self.profile)
        } else {
            None
        }
    }

    fn in_host_app(&self) -> bool {
        true
    }

    fn last_error(&self) -> Option<&str> {
        None
    }

    fn login(&mut self) -> Result<(), IdentityError> {
        self.logged_in = true;
        Ok(())
    }

    fn logout(&mut self) -> Result<(), IdentityError> {
        self.logged_in = false;
        Ok(())
    }

    fn share(&mut self, message: &str) -> Result<(), IdentityError> {
        log::debug!("demo share: {}", message);
        self.shared.push(message.to_string());
        Ok(())
    }
}

/// Push the provider's current profile into the store (set on login,
/// cleared on logout).
pub fn sync_profile(store: &mut AppStore, identity: &dyn IdentityProvider) {
    store.set_profile(identity.profile().cloned());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;

    #[test]
    fn test_demo_identity_starts_logged_in() {
        let identity = DemoIdentity::new();
        assert!(identity.initialized());
        assert!(identity.logged_in());
        assert_eq!(identity.profile().unwrap().user_id, "demo-user");
    }

    #[test]
    fn test_logout_login_cycle() {
        let mut identity = DemoIdentity::new();
        identity.logout().unwrap();
        assert!(!identity.logged_in());
        assert!(identity.profile().is_none());

        identity.login().unwrap();
        assert!(identity.logged_in());
    }

    #[test]
    fn test_share_is_recorded() {
        let mut identity = DemoIdentity::new();
        identity.share("I just completed a quest!").unwrap();
        assert_eq!(identity.shared_messages(), ["I just completed a quest!"]);
    }

    #[test]
    fn test_sync_profile_mirrors_login_state() {
        let mut store = AppStore::new(SessionConfig {
            demo_mode: true,
            ..SessionConfig::default()
        });
        let mut identity = DemoIdentity::new();

        sync_profile(&mut store, &identity);
        assert_eq!(store.profile().unwrap().display_name, "Demo Adventurer");

        identity.logout().unwrap();
        sync_profile(&mut store, &identity);
        assert!(store.profile().is_none());
    }
}
