//! Fixed demo seed data.
//!
//! Demo mode substitutes simulated identity and content for the real
//! external services. The seed sets are code-defined and constant:
//! `initialize_demo_data` REPLACES the live lists with these, so seeding is
//! idempotent by construction.

use crate::model::{Difficulty, Guild, Profile, Quest, QuestKind};

/// The profile demo mode "logs in" as.
pub fn demo_profile() -> Profile {
    Profile::new("demo-user", "Demo Adventurer")
        .with_picture("https://picsum.photos/100/100?random=999")
        .with_status("Exploring the magical world of DeFi!")
}

/// Seed quest set: one per cadence bucket, at various stages.
pub fn demo_quests() -> Vec<Quest> {
    vec![
        Quest {
            id: "1".to_string(),
            title: "Daily Savings Challenge".to_string(),
            description: "Save 50 USDC today to unlock bonus rewards".to_string(),
            reward: 25,
            progress: 75,
            difficulty: Difficulty::Easy,
            time_left: Some("4h 30m".to_string()),
            completed: false,
            kind: QuestKind::Daily,
        },
        Quest {
            id: "2".to_string(),
            title: "Weekly Accumulator".to_string(),
            description: "Reach 500 USDC in total savings this week".to_string(),
            reward: 100,
            progress: 45,
            difficulty: Difficulty::Medium,
            time_left: None,
            completed: false,
            kind: QuestKind::Weekly,
        },
        Quest {
            id: "3".to_string(),
            title: "Round-Up Master".to_string(),
            description: "Complete 10 round-up transactions".to_string(),
            reward: 50,
            progress: 30,
            difficulty: Difficulty::Easy,
            time_left: None,
            completed: false,
            kind: QuestKind::Special,
        },
    ]
}

/// Seed guild set: a single active guild most of the way to its goal.
pub fn demo_guilds() -> Vec<Guild> {
    vec![Guild {
        id: "1".to_string(),
        name: "Crypto Savers".to_string(),
        description: "Building wealth together through consistent savings".to_string(),
        members: vec![
            Profile::new("1", "Alice").with_picture("https://picsum.photos/40/40?random=1"),
            Profile::new("2", "Bob").with_picture("https://picsum.photos/40/40?random=2"),
            Profile::new("3", "Charlie").with_picture("https://picsum.photos/40/40?random=3"),
        ],
        goal_amount: 10_000.0,
        current_amount: 7_500.0,
        quest_active: true,
        created_at: "2024-01-01".to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_quests_are_well_formed() {
        let quests = demo_quests();
        assert_eq!(quests.len(), 3);
        for quest in &quests {
            assert!(!quest.completed);
            assert!(quest.progress <= 100);
            assert!(quest.reward > 0);
        }
        // Ids are unique.
        let mut ids: Vec<_> = quests.iter().map(|q| q.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_seed_guild_under_goal() {
        let guilds = demo_guilds();
        assert_eq!(guilds.len(), 1);
        assert!(guilds[0].current_amount < guilds[0].goal_amount);
        assert_eq!(guilds[0].members.len(), 3);
    }

    #[test]
    fn test_demo_profile_valid() {
        assert!(demo_profile().is_valid());
    }

    #[test]
    fn test_seeds_are_stable() {
        assert_eq!(demo_quests(), demo_quests());
        assert_eq!(demo_guilds(), demo_guilds());
    }
}
