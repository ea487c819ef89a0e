//! Session configuration: the code-defined defaults a fresh store starts
//! from, with environment overrides for the flags operators actually flip.

use crate::model::Stats;
use crate::persistence::Snapshot;
use crate::wallet::TESTNET_CHAIN_ID;

/// Environment variable enabling demo mode (`true` or `1`).
pub const DEMO_MODE_ENV: &str = "QUESTVAULT_DEMO_MODE";
/// Environment variable overriding the target chain id.
pub const CHAIN_ID_ENV: &str = "QUESTVAULT_CHAIN_ID";

/// Everything a session starts from. One of these goes into
/// [`crate::store::AppStore::new`]; tests build their own instead of
/// touching process globals.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// When true, identity/wallet calls are served by demo stand-ins and
    /// demo seed data becomes available.
    pub demo_mode: bool,
    /// Where the adventurer starts on the map.
    pub initial_map_progress: f32,
    /// Starting vault balance shown before any real deposit.
    pub initial_balance: f64,
    pub initial_stats: Stats,
    /// How long the coin-burst animation flag stays up.
    pub coin_burst_ms: u64,
    /// Chain the wallet layer should steer users toward.
    pub target_chain_id: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            demo_mode: false,
            initial_map_progress: 0.35,
            initial_balance: 2_450.0,
            initial_stats: Stats {
                tvl: 1_250_000.0,
                quests_completed: 2_847,
                sbts_minted: 1_203,
                total_users: 5_432,
            },
            coin_burst_ms: 2_000,
            target_chain_id: TESTNET_CHAIN_ID,
        }
    }
}

impl SessionConfig {
    /// Defaults with `QUESTVAULT_DEMO_MODE` / `QUESTVAULT_CHAIN_ID` applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(DEMO_MODE_ENV) {
            config.demo_mode = matches!(value.as_str(), "true" | "1");
        }
        if let Ok(value) = std::env::var(CHAIN_ID_ENV) {
            if let Ok(id) = value.parse() {
                config.target_chain_id = id;
            }
        }
        config
    }

    /// The snapshot a session with no persisted history resolves to; also
    /// the per-field fallback when a persisted snapshot is malformed.
    pub fn default_snapshot(&self) -> Snapshot {
        Snapshot {
            demo_mode: self.demo_mode,
            map_progress: self.initial_map_progress,
            profile: None,
            balance: self.initial_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert!(!config.demo_mode);
        assert_eq!(config.initial_map_progress, 0.35);
        assert_eq!(config.initial_balance, 2_450.0);
        assert_eq!(config.coin_burst_ms, 2_000);
        assert_eq!(config.target_chain_id, TESTNET_CHAIN_ID);
    }

    #[test]
    fn test_default_snapshot_has_no_profile() {
        let snapshot = SessionConfig::default().default_snapshot();
        assert!(snapshot.profile.is_none());
        assert_eq!(snapshot.balance, 2_450.0);
    }
}
