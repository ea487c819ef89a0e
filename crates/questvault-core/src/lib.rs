//! QuestVault Core - Session State Container
//!
//! The single source of truth for a QuestVault session: user profile,
//! quests, guilds, vault balance, aggregate stats, map progress, and the
//! transient animation flags, together with the persisted snapshot that
//! survives restarts.
//!
//! # Architecture
//!
//! - **Model**: plain serde-derived data (`Quest`, `Guild`, `Profile`,
//!   `Stats`) plus typed patches for shallow updates
//! - **Store**: `AppStore` owns every field and all mutation logic; views
//!   read slices and dispatch intents, never holding authoritative copies
//! - **Persistence**: a four-field JSON snapshot with per-field recovery,
//!   handed to an environment-supplied sink after each mutation
//! - **Capabilities**: trait seams for the external identity and wallet
//!   integrations, with demo-mode stand-ins that work offline
//!
//! # Example
//!
//! ```rust
//! use questvault_core::prelude::*;
//!
//! let mut store = AppStore::new(SessionConfig {
//!     demo_mode: true,
//!     ..SessionConfig::default()
//! });
//!
//! store.initialize_demo_data();
//! store.complete_quest("1");
//!
//! // The frame loop drives deferred work (e.g. the coin-burst reset).
//! store.tick(16);
//! assert!(store.map_progress() > 0.35);
//! ```

pub mod config;
pub mod demo;
pub mod identity;
pub mod model;
pub mod persistence;
pub mod store;
pub mod timer;
pub mod wallet;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::config::SessionConfig;
    pub use crate::model::*;
    pub use crate::persistence::{Snapshot, SnapshotSink};
    pub use crate::store::AppStore;
}
