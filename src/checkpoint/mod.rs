//! Checkpoint and resume functionality for state machines.
//!
//! A checkpoint captures where a machine is - its current state and
//! dispatch history - so a long-lived machine can survive a process
//! restart. Guards and actions are closures and cannot be serialized, so
//! the transition table is never part of a checkpoint: restoring takes a
//! freshly built table and reattaches the captured state to it.

use crate::core::{DispatchHistory, Event, State};
use crate::dispatch::{StateMachine, Transition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a state machine.
///
/// Does NOT include the transition table (closures are not serializable);
/// supply the table again when restoring.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State, E: Event> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When the checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// The state the machine started in
    pub initial_state: S,

    /// The state the machine was in when captured
    pub current_state: S,

    /// Complete dispatch history up to the capture point
    pub history: DispatchHistory<S, E>,
}

impl<S: State, E: Event> Checkpoint<S, E> {
    /// Capture a checkpoint of the given machine.
    pub fn capture(machine: &StateMachine<S, E>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state: machine.initial_state().clone(),
            current_state: machine.current_state().clone(),
            history: machine.history().clone(),
        }
    }

    /// Check that this checkpoint can be restored by this version of the
    /// library.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from a JSON string and validate.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Serialize to a compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary encoding and validate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Rebuild a machine from this checkpoint and a fresh transition
    /// table.
    ///
    /// The table must be rebuilt by the application exactly as it was
    /// before the checkpoint; this function cannot verify that, but it
    /// does reject an empty table.
    pub fn restore(self, transitions: Vec<Transition<S, E>>) -> Result<StateMachine<S, E>, CheckpointError> {
        self.validate()?;

        if transitions.is_empty() {
            return Err(CheckpointError::ValidationFailed(
                "transition table is empty".to_string(),
            ));
        }

        Ok(StateMachine::from_parts(
            self.initial_state,
            self.current_state,
            transitions,
            self.history,
        ))
    }
}
