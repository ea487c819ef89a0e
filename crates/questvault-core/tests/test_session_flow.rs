//! End-to-end session flow: configure, seed, play, persist, restart.

use questvault_core::config::SessionConfig;
use questvault_core::identity::{sync_profile, DemoIdentity, IdentityProvider};
use questvault_core::persistence::{load_snapshot, save_snapshot, MemorySink};
use questvault_core::store::AppStore;

fn demo_config() -> SessionConfig {
    SessionConfig {
        demo_mode: true,
        ..SessionConfig::default()
    }
}

#[test]
fn test_full_session_round_trip() {
    // Session one: log in, play, and persist through the sink.
    let sink = MemorySink::new();
    let mut store = AppStore::new(demo_config());
    store.set_sink(Box::new(sink.clone()));
    store.initialize_demo_data();

    let identity = DemoIdentity::new();
    sync_profile(&mut store, &identity);

    store.complete_quest("1");
    store.trigger_coin_burst();
    store.set_balance(2_475.0);
    store.tick(2_000); // burst resets, session keeps running

    assert_eq!(store.completed_quest_count(), 1);
    assert!(!store.show_coin_burst());
    let expected_progress = store.map_progress();

    // The environment writes the sink's last snapshot to durable storage.
    let mut disk = Vec::new();
    save_snapshot(&mut disk, &sink.last().expect("sink saw mutations")).expect("save");

    // Session two: a fresh process restores the snapshot over defaults.
    let config = demo_config();
    let restored = load_snapshot(&disk[..], config.default_snapshot()).expect("load");
    let mut next = AppStore::new(config);
    next.restore(restored);

    assert!(next.demo_mode());
    assert_eq!(next.map_progress(), expected_progress);
    assert_eq!(next.balance(), 2_475.0);
    assert_eq!(next.profile().expect("profile survives").user_id, "demo-user");

    // Quests, guilds, and animation flags start over from code defaults.
    assert!(next.quests().is_empty());
    assert!(next.guilds().is_empty());
    assert!(!next.show_coin_burst());

    // Reseeding brings back the fixed catalog, with the completion gone.
    next.initialize_demo_data();
    assert_eq!(next.quests().len(), 3);
    assert_eq!(next.completed_quest_count(), 0);
}

#[test]
fn test_logout_clears_persisted_profile() {
    let sink = MemorySink::new();
    let mut store = AppStore::new(demo_config());
    store.set_sink(Box::new(sink.clone()));

    let mut identity = DemoIdentity::new();
    sync_profile(&mut store, &identity);
    assert!(sink.last().unwrap().profile.is_some());

    identity.logout().unwrap();
    sync_profile(&mut store, &identity);
    assert!(sink.last().unwrap().profile.is_none());
}

#[test]
fn test_corrupt_disk_state_still_boots() {
    let config = demo_config();
    let garbage: &[u8] = b"{\"mapProgress\":\"treasure\",\"balance\":-3,\"profile\":{}}";
    let restored = load_snapshot(garbage, config.default_snapshot()).expect("load never fails on content");

    let mut store = AppStore::new(config);
    store.restore(restored);

    assert_eq!(store.map_progress(), 0.35);
    assert_eq!(store.balance(), 2_450.0);
    assert!(store.profile().is_none());
}
