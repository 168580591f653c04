//! Dispatch history tracking.
//!
//! Every transition a machine fires is recorded as a [`DispatchRecord`].
//! The log is immutable: recording returns a new history rather than
//! mutating the old one.

use super::event::Event;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single fired transition.
///
/// A record is an immutable value noting which event moved the machine
/// from which state to which, and when.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{DispatchRecord, Event, State};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState { Closed, Open }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorEvent { Push }
///
/// impl Event for DoorEvent {
///     fn name(&self) -> &str { "Push" }
/// }
///
/// let record = DispatchRecord {
///     from: DoorState::Closed,
///     to: DoorState::Open,
///     event: DoorEvent::Push,
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchRecord<S: State, E: Event> {
    /// The state the machine was in when the transition fired
    pub from: S,
    /// The state the machine advanced to
    pub to: S,
    /// The event that triggered the transition
    pub event: E,
    /// When the transition fired
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of fired transitions.
///
/// The history is immutable - [`record`](DispatchHistory::record) returns
/// a new history with the record appended, leaving the original untouched.
/// Unhandled events record nothing: the log only ever contains transitions
/// that actually fired.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchHistory<S: State, E: Event> {
    records: Vec<DispatchRecord<S, E>>,
}

impl<S: State, E: Event> Default for DispatchHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> DispatchHistory<S, E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a fired transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the record appended.
    pub fn record(&self, record: DispatchRecord<S, E>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the
    /// first record, then the `to` state of each record.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statecraft::core::{DispatchHistory, DispatchRecord};
    /// use statecraft::{event_enum, state_enum};
    /// use chrono::Utc;
    ///
    /// state_enum! {
    ///     enum Phase { One, Two, Three }
    /// }
    ///
    /// event_enum! {
    ///     enum Step { Advance }
    /// }
    ///
    /// let mut history = DispatchHistory::new();
    ///
    /// history = history.record(DispatchRecord {
    ///     from: Phase::One,
    ///     to: Phase::Two,
    ///     event: Step::Advance,
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// history = history.record(DispatchRecord {
    ///     from: Phase::Two,
    ///     to: Phase::Three,
    ///     event: Step::Advance,
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// let path = history.path();
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path[0], &Phase::One);
    /// assert_eq!(path[1], &Phase::Two);
    /// assert_eq!(path[2], &Phase::Three);
    /// ```
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total duration from first to last fired transition.
    ///
    /// Returns `None` if nothing has fired yet.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in dispatch order.
    pub fn records(&self) -> &[DispatchRecord<S, E>] {
        &self.records
    }
}
