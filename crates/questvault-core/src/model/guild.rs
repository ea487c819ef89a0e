//! Guilds: collective savings groups with a shared goal.

use super::Profile;
use questvault_logic::progress;
use serde::{Deserialize, Serialize};

/// A named group of profiles saving toward a common goal.
///
/// Membership is by value — the core does not dedup members or check
/// referential identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guild {
    pub id: String,
    pub name: String,
    pub description: String,
    pub members: Vec<Profile>,
    /// Positive savings target.
    pub goal_amount: f64,
    /// Current pooled amount; may exceed the goal.
    pub current_amount: f64,
    pub quest_active: bool,
    /// Opaque timestamp string from the creating client.
    pub created_at: String,
}

impl Guild {
    /// Percent of the goal reached (can exceed 100).
    pub fn goal_percent(&self) -> f64 {
        progress::goal_percent(self.current_amount, self.goal_amount)
    }
}

/// Field-by-field update for [`Guild`]; `None` leaves a field untouched.
/// Applied by linear scan, O(n) over the guild list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuildPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub members: Option<Vec<Profile>>,
    pub goal_amount: Option<f64>,
    pub current_amount: Option<f64>,
    pub quest_active: Option<bool>,
    pub created_at: Option<String>,
}

impl GuildPatch {
    pub fn apply(&self, guild: &mut Guild) {
        if let Some(name) = &self.name {
            guild.name = name.clone();
        }
        if let Some(description) = &self.description {
            guild.description = description.clone();
        }
        if let Some(members) = &self.members {
            guild.members = members.clone();
        }
        if let Some(goal_amount) = self.goal_amount {
            guild.goal_amount = goal_amount;
        }
        if let Some(current_amount) = self.current_amount {
            guild.current_amount = current_amount;
        }
        if let Some(quest_active) = self.quest_active {
            guild.quest_active = quest_active;
        }
        if let Some(created_at) = &self.created_at {
            guild.created_at = created_at.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_guild(id: &str) -> Guild {
        Guild {
            id: id.to_string(),
            name: "Crypto Savers".to_string(),
            description: "Building wealth together".to_string(),
            members: vec![Profile::new("1", "Alice"), Profile::new("2", "Bob")],
            goal_amount: 10_000.0,
            current_amount: 7_500.0,
            quest_active: true,
            created_at: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_goal_percent() {
        let mut guild = make_guild("g1");
        assert_eq!(guild.goal_percent(), 75.0);
        guild.current_amount = 12_500.0;
        assert_eq!(guild.goal_percent(), 125.0);
    }

    #[test]
    fn test_patch_merges_shallowly() {
        let mut guild = make_guild("g1");
        GuildPatch {
            current_amount: Some(9_000.0),
            quest_active: Some(false),
            ..Default::default()
        }
        .apply(&mut guild);

        assert_eq!(guild.current_amount, 9_000.0);
        assert!(!guild.quest_active);
        assert_eq!(guild.name, "Crypto Savers");
        assert_eq!(guild.members.len(), 2);
    }

    #[test]
    fn test_members_replaced_wholesale() {
        let mut guild = make_guild("g1");
        GuildPatch {
            members: Some(vec![Profile::new("3", "Charlie")]),
            ..Default::default()
        }
        .apply(&mut guild);
        assert_eq!(guild.members.len(), 1);
        assert_eq!(guild.members[0].display_name, "Charlie");
    }
}
