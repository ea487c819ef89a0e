//! QuestVault Headless Validation Harness
//!
//! Exercises the session store and path logic without a renderer or any
//! external service. Runs entirely in-process — no network, no disk, no
//! real timers.
//!
//! Usage:
//!   cargo run -p questvault-simtest
//!   cargo run -p questvault-simtest -- --verbose

use questvault_core::config::SessionConfig;
use questvault_core::demo;
use questvault_core::identity::{DemoIdentity, IdentityProvider};
use questvault_core::model::{GuildPatch, QuestPatch};
use questvault_core::persistence::{recover_snapshot, MemorySink, STORE_KEY};
use questvault_core::store::AppStore;
use questvault_core::wallet::{DemoWallet, WalletError, WalletProvider, MAINNET_CHAIN_ID};
use questvault_logic::path::PathCurve;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed,
        detail: detail.into(),
    }
}

fn demo_store() -> AppStore {
    let mut store = AppStore::new(SessionConfig {
        demo_mode: true,
        ..SessionConfig::default()
    });
    store.initialize_demo_data();
    store
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== QuestVault Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Fresh-store defaults
    results.extend(validate_defaults());

    // 2. Map-progress clamping sweep
    results.extend(validate_clamping());

    // 3. Quest completion invariant
    results.extend(validate_completion());

    // 4. Patch no-op safety
    results.extend(validate_patch_noops());

    // 5. Coin-burst timing
    results.extend(validate_coin_burst());

    // 6. Snapshot round-trip and corruption recovery
    results.extend(validate_snapshot());

    // 7. Demo seeding
    results.extend(validate_demo_seeding());

    // 8. Path curve
    results.extend(validate_path());

    // 9. Capability stand-ins
    results.extend(validate_capabilities());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Fresh-store defaults ─────────────────────────────────────────────

fn validate_defaults() -> Vec<TestResult> {
    println!("--- Store Defaults ---");
    let store = AppStore::default();

    vec![
        check(
            "default_map_progress",
            store.map_progress() == 0.35,
            format!("starts at {}", store.map_progress()),
        ),
        check(
            "default_balance",
            store.balance() == 2_450.0,
            format!("starts at {}", store.balance()),
        ),
        check(
            "default_lists_empty",
            store.quests().is_empty() && store.guilds().is_empty(),
            "quests and guilds start empty",
        ),
        check(
            "default_flags",
            !store.demo_mode() && !store.show_coin_burst() && store.profile().is_none(),
            "no demo mode, no burst, no profile",
        ),
        check(
            "default_stats_seeded",
            store.stats().total_users == 5_432,
            format!("{} platform users", store.stats().total_users),
        ),
    ]
}

// ── 2. Map-progress clamping ────────────────────────────────────────────

fn validate_clamping() -> Vec<TestResult> {
    println!("--- Progress Clamping ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mut store = AppStore::default();

    let mut bad = 0;
    for _ in 0..500 {
        let p: f32 = rng.gen_range(-5.0..5.0);
        store.set_map_progress(p);
        let expected = p.clamp(0.0, 1.0);
        if (store.map_progress() - expected).abs() > f32::EPSILON {
            bad += 1;
        }
    }
    results.push(check(
        "clamp_sweep",
        bad == 0,
        format!("{}/500 random writes mismatched", bad),
    ));

    store.set_map_progress(f32::NAN);
    results.push(check(
        "clamp_nan",
        store.map_progress() == 0.0,
        "NaN collapses to 0",
    ));

    store.set_map_progress(f32::INFINITY);
    results.push(check(
        "clamp_infinity",
        store.map_progress() == 0.0,
        "infinity collapses to 0",
    ));

    results
}

// ── 3. Quest completion invariant ───────────────────────────────────────

fn validate_completion() -> Vec<TestResult> {
    println!("--- Quest Completion ---");
    let mut results = Vec::new();

    let mut store = demo_store();
    store.set_map_progress(0.35);
    store.complete_quest("1");

    let quest = store.quest("1").expect("seed quest 1");
    results.push(check(
        "completion_invariant",
        quest.completed && quest.progress == 100,
        format!("completed={} progress={}", quest.completed, quest.progress),
    ));
    results.push(check(
        "completion_advances_map",
        (store.map_progress() - 0.45).abs() < 1e-6,
        format!("map progress now {:.3}", store.map_progress()),
    ));

    // Completing everything repeatedly can never push past the end.
    for _ in 0..20 {
        store.complete_quest("1");
        store.complete_quest("2");
        store.complete_quest("3");
    }
    results.push(check(
        "completion_clamps_at_end",
        store.map_progress() == 1.0,
        format!("map progress capped at {}", store.map_progress()),
    ));

    // Unknown id: the quest list is untouched but the map advance is
    // unconditional.
    let mut parity = demo_store();
    parity.set_map_progress(0.5);
    let quests_before = parity.quests().to_vec();
    parity.complete_quest("nonexistent");
    results.push(check(
        "completion_unknown_id_parity",
        parity.quests() == &quests_before[..] && (parity.map_progress() - 0.6).abs() < 1e-6,
        "quests deep-equal, map bumped one step",
    ));

    results.push(check(
        "completion_derived_values",
        store.completed_quest_count() == 3 && store.completion_ratio() == 1.0,
        format!(
            "{} completed, {} reward units earned",
            store.completed_quest_count(),
            store.total_reward_earned()
        ),
    ));

    results
}

// ── 4. Patch no-op safety ───────────────────────────────────────────────

fn validate_patch_noops() -> Vec<TestResult> {
    println!("--- Patch No-ops ---");
    let mut results = Vec::new();

    let mut store = demo_store();
    let quests_before = store.quests().to_vec();
    let guilds_before = store.guilds().to_vec();

    store.update_quest(
        "nonexistent",
        QuestPatch {
            progress: Some(99),
            completed: Some(true),
            ..Default::default()
        },
    );
    results.push(check(
        "unknown_quest_id_noop",
        store.quests() == &quests_before[..],
        "quest list deep-equal after unknown-id patch",
    ));

    store.update_guild(
        "nonexistent",
        GuildPatch {
            current_amount: Some(1.0),
            ..Default::default()
        },
    );
    results.push(check(
        "unknown_guild_id_noop",
        store.guilds() == &guilds_before[..],
        "guild list deep-equal after unknown-id patch",
    ));

    // A real patch touches exactly the named fields.
    store.update_quest(
        "2",
        QuestPatch {
            progress: Some(80),
            ..Default::default()
        },
    );
    let quest = store.quest("2").expect("seed quest 2");
    results.push(check(
        "patch_is_shallow",
        quest.progress == 80 && quest.title == quests_before[1].title,
        "only the patched field changed",
    ));

    results
}

// ── 5. Coin-burst timing ────────────────────────────────────────────────

fn validate_coin_burst() -> Vec<TestResult> {
    println!("--- Coin Burst ---");
    let mut results = Vec::new();

    let mut store = AppStore::default();
    store.trigger_coin_burst();
    let synchronous = store.show_coin_burst();

    store.tick(1_999);
    let still_up = store.show_coin_burst();
    store.tick(1);
    let dropped = !store.show_coin_burst();

    results.push(check(
        "burst_lifecycle",
        synchronous && still_up && dropped,
        "up synchronously, down exactly at 2000 ms",
    ));

    // A re-trigger extends the burst; the first reset must not fire early.
    store.trigger_coin_burst();
    store.tick(1_500);
    store.trigger_coin_burst();
    store.tick(1_999);
    let extended = store.show_coin_burst();
    store.tick(1);
    results.push(check(
        "burst_retrigger_extends",
        extended && !store.show_coin_burst(),
        "latest trigger owns the reset",
    ));

    results
}

// ── 6. Snapshot persistence ─────────────────────────────────────────────

fn validate_snapshot() -> Vec<TestResult> {
    println!("--- Snapshot Persistence ---");
    let mut results = Vec::new();
    let config = SessionConfig::default();

    // Round-trip through the sink and a byte buffer.
    let sink = MemorySink::new();
    let mut store = demo_store();
    store.set_sink(Box::new(sink.clone()));
    store.set_map_progress(0.42);
    store.set_balance(500.0);
    store.set_profile(Some(demo::demo_profile()));

    let raw = serde_json::to_string(&sink.last().expect("sink wrote")).expect("serialize");
    let restored = recover_snapshot(&raw, config.default_snapshot());

    let mut fresh = AppStore::new(SessionConfig::default());
    fresh.restore(restored);
    results.push(check(
        "round_trip",
        fresh.demo_mode()
            && fresh.map_progress() == 0.42
            && fresh.balance() == 500.0
            && fresh.profile().map(|p| p.user_id.as_str()) == Some("demo-user"),
        format!("all four fields of '{}' survive", STORE_KEY),
    ));
    results.push(check(
        "round_trip_resets_rest",
        fresh.quests().is_empty() && fresh.guilds().is_empty(),
        "quests/guilds are code defaults after restore",
    ));

    // Corruption matrix: each damaged field recovers individually.
    let cases: &[(&str, &str)] = &[
        ("garbage_document", "}{ not json"),
        ("wrong_root", "[1,2,3]"),
        ("mistyped_progress", r#"{"mapProgress":"far along"}"#),
        ("mistyped_demo_mode", r#"{"demoMode":"yes"}"#),
        ("profile_missing_id", r#"{"profile":{"displayName":"A"}}"#),
        ("negative_balance", r#"{"balance":-500}"#),
        ("unknown_extra_field", r#"{"futureField":true}"#),
    ];
    let defaults = config.default_snapshot();
    let mut recovered = 0;
    for (name, raw) in cases {
        let snapshot = recover_snapshot(raw, defaults.clone());
        let ok = snapshot.map_progress == defaults.map_progress
            && snapshot.balance == defaults.balance
            && snapshot.profile.is_none();
        if ok {
            recovered += 1;
        } else {
            results.push(check(name, false, format!("left state {:?}", snapshot)));
        }
    }
    results.push(check(
        "corruption_matrix",
        recovered == cases.len(),
        format!("{}/{} corrupt documents recovered", recovered, cases.len()),
    ));

    // A valid field next to a broken one is still honored.
    let mixed = recover_snapshot(
        r#"{"mapProgress":0.9,"balance":"broke"}"#,
        config.default_snapshot(),
    );
    results.push(check(
        "per_field_recovery",
        mixed.map_progress == 0.9 && mixed.balance == 2_450.0,
        "good field kept, bad field defaulted",
    ));

    results
}

// ── 7. Demo seeding ─────────────────────────────────────────────────────

fn validate_demo_seeding() -> Vec<TestResult> {
    println!("--- Demo Seeding ---");
    let mut results = Vec::new();

    let mut off = AppStore::default();
    off.initialize_demo_data();
    results.push(check(
        "seeding_requires_demo_mode",
        off.quests().is_empty() && off.guilds().is_empty(),
        "no-op outside demo mode",
    ));

    let mut store = demo_store();
    let first = store.quests().to_vec();
    store.initialize_demo_data();
    results.push(check(
        "seeding_idempotent",
        store.quests() == &first[..] && store.quests().len() == 3,
        format!("{} quests after double seed", store.quests().len()),
    ));

    store.set_balance(9_999.0);
    store.initialize_demo_data();
    results.push(check(
        "seeding_nondestructive",
        store.balance() == 9_999.0,
        "balance untouched by reseed",
    ));

    results
}

// ── 8. Path curve ───────────────────────────────────────────────────────

fn validate_path() -> Vec<TestResult> {
    println!("--- Path Curve ---");
    let mut results = Vec::new();
    let curve = PathCurve::adventure_default();
    let points = curve.control_points().to_vec();

    results.push(check(
        "path_endpoints",
        curve.point(0.0) == points[0] && curve.point(1.0) == points[points.len() - 1],
        "progress 0/1 are exactly the first/last control points",
    ));

    let through_all = (1..points.len() - 1).all(|i| {
        let p = i as f32 / (points.len() - 1) as f32;
        curve.point(p).distance(&points[i]) < 1e-5
    });
    results.push(check(
        "path_interpolates_controls",
        through_all,
        "every control point is on the curve",
    ));

    // Continuity sweep with random sample positions.
    let mut rng = StdRng::seed_from_u64(7);
    let mut max_step = 0.0f32;
    for _ in 0..2_000 {
        let p: f32 = rng.gen_range(0.0..1.0);
        let step = curve.point(p).distance(&curve.point(p + 5e-4));
        max_step = max_step.max(step);
    }
    results.push(check(
        "path_continuity",
        max_step < 0.01,
        format!("max step {:.5} over 2000 random probes", max_step),
    ));

    let tangents_unit = (0..=100).all(|i| {
        let t = curve.tangent(i as f32 / 100.0);
        (t.length() - 1.0).abs() < 1e-4
    });
    results.push(check(
        "path_tangent_unit",
        tangents_unit,
        "tangent normalized across the arc",
    ));

    results.push(check(
        "path_clamps_input",
        curve.point(-2.0) == points[0] && curve.point(42.0) == points[points.len() - 1],
        "out-of-range progress pinned to the ends",
    ));

    // Map progress drives the pose deterministically.
    let mut store = demo_store();
    store.set_map_progress(0.35);
    let a = curve.pose(store.map_progress());
    let b = curve.pose(store.map_progress());
    results.push(check(
        "path_deterministic",
        a == b,
        "identical input, identical pose",
    ));

    results
}

// ── 9. Capability stand-ins ─────────────────────────────────────────────

fn validate_capabilities() -> Vec<TestResult> {
    println!("--- Capabilities ---");
    let mut results = Vec::new();

    let mut identity = DemoIdentity::new();
    let started_logged_in = identity.logged_in() && identity.initialized();
    identity.share("Join my guild!").expect("demo share");
    identity.logout().expect("demo logout");
    results.push(check(
        "demo_identity_flow",
        started_logged_in && !identity.logged_in() && identity.shared_messages().len() == 1,
        "login state and share recording behave",
    ));

    let mut wallet = DemoWallet::default();
    let rejected = wallet.connect("carrierPigeon") == Err(WalletError::UnknownConnector("carrierPigeon".to_string()));
    wallet.connect("metaMask").expect("demo connect");
    wallet.switch_chain(MAINNET_CHAIN_ID).expect("switch chain");
    let unsupported = wallet.switch_chain(31337) == Err(WalletError::UnsupportedChain(31337));
    results.push(check(
        "demo_wallet_flow",
        rejected && unsupported && wallet.connected() && wallet.chain_id() == MAINNET_CHAIN_ID,
        "connector and chain validation behave",
    ));

    results
}
