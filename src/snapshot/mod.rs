//! Snapshot and resume functionality for machine instances.
//!
//! A snapshot captures a machine's serializable parts - current state and
//! transition history - so an instance can be rebuilt later against the
//! same (or an equivalent) table. Guards and actions are never serialized,
//! and neither is the table itself: resuming requires the caller to supply
//! both the table and fresh context.

use crate::core::{Event, State, StateHistory};
use crate::machine::StateMachine;
use crate::table::TransitionTable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of a machine instance.
///
/// Does NOT include the transition table, guards, actions, or context.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<S: State> {
    /// Snapshot format version
    pub version: u32,

    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// Current state of the machine
    pub current_state: S,

    /// Complete transition history
    pub history: StateHistory<S>,
}

impl<S: State> Snapshot<S> {
    /// Serialize the snapshot to JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }
}

impl<S: State, E: Event, C> StateMachine<S, E, C> {
    /// Take a snapshot of this machine's serializable state.
    pub fn snapshot(&self) -> Snapshot<S> {
        Snapshot {
            version: SNAPSHOT_VERSION,
            timestamp: Utc::now(),
            current_state: self.current_state().clone(),
            history: self.history().clone(),
        }
    }

    /// Rebuild a machine from a snapshot, a table, and fresh context.
    ///
    /// Rejects snapshots written by an unknown format version.
    pub fn resume(
        table: Arc<TransitionTable<S, E, C>>,
        context: C,
        snapshot: Snapshot<S>,
    ) -> Result<Self, SnapshotError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        Ok(Self::with_parts(
            table,
            snapshot.current_state,
            context,
            snapshot.history,
        ))
    }
}
