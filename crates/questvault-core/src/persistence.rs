//! Snapshot persistence for the session store.
//!
//! Only four fields survive a restart: `demoMode`, `mapProgress`, `profile`,
//! `balance`. Everything else (quests, guilds, stats, animation flags)
//! restarts from code defaults. The snapshot is a small JSON document keyed
//! under [`STORE_KEY`]. Unknown fields are ignored and damaged fields are
//! recovered individually: persisted data is untrusted input and must never
//! crash the load.

use crate::model::Profile;
use questvault_logic::{progress, validate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::RefCell;
use std::io::{Read, Write};
use std::rc::Rc;

/// Key the durable record lives under in the host environment's storage.
pub const STORE_KEY: &str = "questvault-store";

/// The persisted subset of session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub demo_mode: bool,
    pub map_progress: f32,
    pub profile: Option<Profile>,
    pub balance: f64,
}

/// Receives the snapshot after every store mutation. The environment owns
/// durability; the store only hands over the DTO.
pub trait SnapshotSink {
    fn persist(&mut self, snapshot: &Snapshot);
}

/// Shared-handle in-memory sink for tests and demo embeddings. Clones share
/// one buffer, so a handle kept outside the store observes what the store
/// wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Rc<RefCell<MemorySinkState>>,
}

#[derive(Debug, Default)]
struct MemorySinkState {
    last: Option<Snapshot>,
    writes: u64,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently persisted snapshot, if any.
    pub fn last(&self) -> Option<Snapshot> {
        self.inner.borrow().last.clone()
    }

    /// How many times the store persisted.
    pub fn writes(&self) -> u64 {
        self.inner.borrow().writes
    }
}

impl SnapshotSink for MemorySink {
    fn persist(&mut self, snapshot: &Snapshot) {
        let mut state = self.inner.borrow_mut();
        state.last = Some(snapshot.clone());
        state.writes += 1;
    }
}

/// Serialize a snapshot to a writer as JSON.
pub fn save_snapshot<W: Write>(writer: W, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    serde_json::to_writer(writer, snapshot)?;
    Ok(())
}

/// Load a snapshot from a reader, recovering damaged fields.
///
/// Only genuine read failures surface as errors; malformed content resolves
/// to `defaults` (whole or per field) per [`recover_snapshot`].
pub fn load_snapshot<R: Read>(mut reader: R, defaults: Snapshot) -> Result<Snapshot, SnapshotError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(recover_snapshot(&raw, defaults))
}

/// Per-field recovery: any field that is missing, mistyped, or fails shape
/// validation falls back to its default; unknown fields are ignored.
pub fn recover_snapshot(raw: &str, defaults: Snapshot) -> Snapshot {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("snapshot unreadable, starting from defaults: {}", err);
            return defaults;
        }
    };
    let Value::Object(fields) = value else {
        log::warn!("snapshot is not an object, starting from defaults");
        return defaults;
    };

    let mut snapshot = defaults;

    match fields.get("demoMode") {
        Some(Value::Bool(enabled)) => snapshot.demo_mode = *enabled,
        Some(_) => log::warn!("snapshot demoMode is not a bool, keeping default"),
        None => {}
    }

    match fields.get("mapProgress") {
        Some(Value::Number(number)) => {
            if let Some(p) = number.as_f64() {
                if !validate::valid_unit_interval(p as f32) {
                    log::warn!("snapshot mapProgress {} out of range, clamping", p);
                }
                snapshot.map_progress = progress::clamp_unit(p as f32);
            }
        }
        Some(_) => log::warn!("snapshot mapProgress is not a number, keeping default"),
        None => {}
    }

    match fields.get("profile") {
        Some(Value::Null) => snapshot.profile = None,
        Some(value) => match serde_json::from_value::<Profile>(value.clone()) {
            Ok(profile) if profile.is_valid() => snapshot.profile = Some(profile),
            Ok(_) => log::warn!("snapshot profile fails shape validation, keeping default"),
            Err(err) => log::warn!("snapshot profile unreadable, keeping default: {}", err),
        },
        None => {}
    }

    match fields.get("balance") {
        Some(Value::Number(number)) => match number.as_f64() {
            Some(balance) if validate::valid_balance(balance) => snapshot.balance = balance,
            _ => log::warn!("snapshot balance invalid, keeping default"),
        },
        Some(_) => log::warn!("snapshot balance is not a number, keeping default"),
        None => {}
    }

    snapshot
}

/// Errors that can occur while moving snapshots to or from storage.
#[derive(Debug)]
pub enum SnapshotError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        SnapshotError::Io(err)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Json(err)
    }
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Io(err) => write!(f, "IO error: {}", err),
            SnapshotError::Json(err) => write!(f, "Serialization error: {}", err),
        }
    }
}

impl std::error::Error for SnapshotError {}
