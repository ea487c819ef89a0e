//! Aggregate platform stats shown on the dashboard.

use serde::{Deserialize, Serialize};

/// Read-mostly aggregate snapshot, replaced wholesale by the environment.
/// The store never computes deltas on these.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Total value locked across the platform, in currency units.
    pub tvl: f64,
    pub quests_completed: u64,
    pub sbts_minted: u64,
    pub total_users: u64,
}
