//! The session store — single source of truth for QuestVault state.
//!
//! One `AppStore` is constructed per process (or per test) and passed by
//! reference to consumers; there is no global. All operations are
//! synchronous and run to completion, matching the single-threaded
//! frame-driven model of the host: readers see writes in dispatch order,
//! and no operation can observe another half-applied. A multi-threaded
//! embedding must wrap the store in a mutex; the store itself is not `Sync`.
//!
//! No operation here fails. Each one either applies or is a documented
//! no-op (unknown ids, demo seeding outside demo mode).

use crate::config::SessionConfig;
use crate::demo;
use crate::model::{Guild, GuildPatch, Profile, Quest, QuestKind, QuestPatch, Stats};
use crate::persistence::{Snapshot, SnapshotSink};
use crate::timer::PulseTimer;
use questvault_logic::progress;

/// Session state container.
pub struct AppStore {
    config: SessionConfig,

    demo_mode: bool,
    map_progress: f32,
    profile: Option<Profile>,
    guilds: Vec<Guild>,
    quests: Vec<Quest>,
    stats: Stats,
    balance: f64,

    show_coin_burst: bool,
    burst_timer: PulseTimer,
    /// Cooperative clock, advanced by `tick`.
    now_ms: u64,

    sink: Option<Box<dyn SnapshotSink>>,
}

impl AppStore {
    /// The single point of construction. Quests, guilds, and the animation
    /// flag always start empty/false; the rest comes from `config`.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            demo_mode: config.demo_mode,
            map_progress: progress::clamp_unit(config.initial_map_progress),
            profile: None,
            guilds: Vec::new(),
            quests: Vec::new(),
            stats: config.initial_stats,
            balance: config.initial_balance,
            show_coin_burst: false,
            burst_timer: PulseTimer::new(),
            now_ms: 0,
            sink: None,
            config,
        }
    }

    /// Install the persistence hook. From here on every mutation hands the
    /// four-field snapshot to the sink.
    pub fn set_sink(&mut self, sink: Box<dyn SnapshotSink>) {
        self.sink = Some(sink);
    }

    // ── Mutations ───────────────────────────────────────────────────────

    pub fn set_demo_mode(&mut self, enabled: bool) {
        self.demo_mode = enabled;
        self.persist();
    }

    /// Clamped to [0, 1]; never fails, no other side effect.
    pub fn set_map_progress(&mut self, p: f32) {
        self.map_progress = progress::clamp_unit(p);
        self.persist();
    }

    /// Wholesale profile replacement; `None` means logged out.
    pub fn set_profile(&mut self, profile: Option<Profile>) {
        self.profile = profile;
        self.persist();
    }

    pub fn set_guilds(&mut self, guilds: Vec<Guild>) {
        self.guilds = guilds;
        self.persist();
    }

    /// Appends without a duplicate-id check — duplicate ids are a caller
    /// error, not validated here.
    pub fn add_guild(&mut self, guild: Guild) {
        self.guilds.push(guild);
        self.persist();
    }

    /// Shallow-merges `patch` into the guild with `id`; silently a no-op
    /// when the id is unknown. Linear scan, O(n).
    pub fn update_guild(&mut self, id: &str, patch: GuildPatch) {
        if let Some(guild) = self.guilds.iter_mut().find(|g| g.id == id) {
            patch.apply(guild);
        }
        self.persist();
    }

    pub fn set_quests(&mut self, quests: Vec<Quest>) {
        self.quests = quests;
        self.persist();
    }

    /// Shallow-merges `patch` into the quest with `id`; silently a no-op
    /// when the id is unknown. `progress` values are stored as given.
    pub fn update_quest(&mut self, id: &str, patch: QuestPatch) {
        if let Some(quest) = self.quests.iter_mut().find(|q| q.id == id) {
            patch.apply(quest);
        }
        self.persist();
    }

    /// Marks the quest completed (progress forced to 100) and advances the
    /// adventure by one completion step, clamped to 1. The two writes apply
    /// together: each completed quest moves the adventurer.
    ///
    /// The map advance applies even when the id is unknown; only the quest
    /// mutation is skipped.
    pub fn complete_quest(&mut self, id: &str) {
        if let Some(quest) = self.quests.iter_mut().find(|q| q.id == id) {
            quest.mark_completed();
            log::debug!("quest {} completed", id);
        }
        self.map_progress = progress::advance(self.map_progress, progress::COMPLETION_STEP);
        self.persist();
    }

    pub fn set_stats(&mut self, stats: Stats) {
        self.stats = stats;
        self.persist();
    }

    pub fn set_balance(&mut self, balance: f64) {
        self.balance = balance;
        self.persist();
    }

    /// Raise the coin-burst flag now; it drops `coin_burst_ms` after the
    /// LAST trigger. Re-triggering re-arms the one pending reset, so an
    /// earlier trigger's reset can never cut a later burst short.
    pub fn trigger_coin_burst(&mut self) {
        self.show_coin_burst = true;
        let generation = self.burst_timer.arm(self.now_ms, self.config.coin_burst_ms);
        log::debug!("coin burst armed (generation {})", generation);
        self.persist();
    }

    /// Replace quests and guilds with the fixed demo seed sets. No-op
    /// outside demo mode; idempotent (replacement, not append); never
    /// touches profile or balance.
    pub fn initialize_demo_data(&mut self) {
        if !self.demo_mode {
            return;
        }
        self.quests = demo::demo_quests();
        self.guilds = demo::demo_guilds();
        log::info!(
            "demo data seeded: {} quests, {} guilds",
            self.quests.len(),
            self.guilds.len()
        );
        self.persist();
    }

    /// Advance the cooperative clock and run any due deferred work (the
    /// coin-burst reset). The embedding frame loop calls this.
    pub fn tick(&mut self, delta_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(delta_ms);
        if self.burst_timer.poll(self.now_ms) && self.show_coin_burst {
            self.show_coin_burst = false;
            self.persist();
        }
    }

    // ── Snapshot ────────────────────────────────────────────────────────

    /// The persisted subset of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            demo_mode: self.demo_mode,
            map_progress: self.map_progress,
            profile: self.profile.clone(),
            balance: self.balance,
        }
    }

    /// Merge an (already recovered) snapshot over this session's defaults.
    /// Quests, guilds, stats, and the animation flag stay at their code
    /// defaults. The sink is not notified.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.demo_mode = snapshot.demo_mode;
        self.map_progress = progress::clamp_unit(snapshot.map_progress);
        self.profile = snapshot.profile.filter(|p| p.is_valid());
        self.balance = if questvault_logic::validate::valid_balance(snapshot.balance) {
            snapshot.balance
        } else {
            self.config.initial_balance
        };
        log::info!("session restored from snapshot");
    }

    fn persist(&mut self) {
        if self.sink.is_none() {
            return;
        }
        let snapshot = self.snapshot();
        if let Some(sink) = self.sink.as_mut() {
            sink.persist(&snapshot);
        }
    }

    // ── Reads ───────────────────────────────────────────────────────────

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    pub fn map_progress(&self) -> f32 {
        self.map_progress
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn guilds(&self) -> &[Guild] {
        &self.guilds
    }

    pub fn guild(&self, id: &str) -> Option<&Guild> {
        self.guilds.iter().find(|g| g.id == id)
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn quest(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn show_coin_burst(&self) -> bool {
        self.show_coin_burst
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    // ── Derived values ──────────────────────────────────────────────────

    pub fn completed_quest_count(&self) -> usize {
        self.quests.iter().filter(|q| q.completed).count()
    }

    /// Fraction of the quest list completed, 0 when the list is empty.
    pub fn completion_ratio(&self) -> f32 {
        progress::completion_ratio(self.completed_quest_count(), self.quests.len())
    }

    /// Sum of rewards on completed quests.
    pub fn total_reward_earned(&self) -> u64 {
        self.quests
            .iter()
            .filter(|q| q.completed)
            .map(|q| u64::from(q.reward))
            .sum()
    }

    pub fn quests_of_kind(&self, kind: QuestKind) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(move |q| q.kind == kind)
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
