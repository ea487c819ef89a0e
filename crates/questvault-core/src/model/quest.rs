//! Quests: progress-bound units of work with a currency reward.

use serde::{Deserialize, Serialize};

/// How demanding a quest is, for display and reward scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Cadence bucket a quest belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    Daily,
    Weekly,
    Special,
}

/// A trackable task with reward, progress, and completion state.
///
/// Invariant: `completed` implies `progress == 100`. The reverse is not
/// enforced — reaching 100 does not complete a quest; completion is an
/// explicit store operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Non-negative reward in currency units.
    pub reward: u32,
    /// 0–100. Patch writes are stored as given; callers clamp.
    pub progress: u8,
    pub difficulty: Difficulty,
    /// Opaque display string ("4h 30m"). Not a timer — nothing counts down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_left: Option<String>,
    pub completed: bool,
    #[serde(rename = "type")]
    pub kind: QuestKind,
}

impl Quest {
    /// Force the completed state, keeping the completion invariant in one
    /// place.
    pub fn mark_completed(&mut self) {
        self.completed = true;
        self.progress = 100;
    }
}

/// Field-by-field update for [`Quest`]; `None` leaves a field untouched.
///
/// Applied by linear scan over the quest list — O(n), fine at tens of
/// entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub reward: Option<u32>,
    pub progress: Option<u8>,
    pub difficulty: Option<Difficulty>,
    pub time_left: Option<String>,
    pub completed: Option<bool>,
    pub kind: Option<QuestKind>,
}

impl QuestPatch {
    pub fn apply(&self, quest: &mut Quest) {
        if let Some(title) = &self.title {
            quest.title = title.clone();
        }
        if let Some(description) = &self.description {
            quest.description = description.clone();
        }
        if let Some(reward) = self.reward {
            quest.reward = reward;
        }
        if let Some(progress) = self.progress {
            quest.progress = progress;
        }
        if let Some(difficulty) = self.difficulty {
            quest.difficulty = difficulty;
        }
        if let Some(time_left) = &self.time_left {
            quest.time_left = Some(time_left.clone());
        }
        if let Some(completed) = self.completed {
            quest.completed = completed;
        }
        if let Some(kind) = self.kind {
            quest.kind = kind;
        }
    }
}
