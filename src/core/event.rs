//! Core Event trait for state machine triggers.
//!
//! Events are the inputs presented to a machine's dispatch loop. They live
//! in a domain of their own, distinct from the state domain of the same
//! machine: a machine is generic over both, so the two can never be mixed.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine events.
///
/// An event is an opaque, equality-comparable value presented to a machine
/// via [`trigger`](crate::dispatch::StateMachine::trigger). Dispatch only
/// ever compares events for equality; it attaches no further meaning to
/// them.
///
/// # Required Traits
///
/// - `Clone`: events are copied into dispatch records
/// - `PartialEq`: events are matched against transitions during dispatch
/// - `Debug`: events must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: events must be serializable for checkpoints
///
/// # Example
///
/// ```rust
/// use statecraft::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum LampEvent {
///     FlickSwitch,
///     PowerCut,
/// }
///
/// impl Event for LampEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::FlickSwitch => "FlickSwitch",
///             Self::PowerCut => "PowerCut",
///         }
///     }
/// }
/// ```
pub trait Event: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestEvent {
        TurnOn,
        TurnOff,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::TurnOn => "TurnOn",
                Self::TurnOff => "TurnOff",
            }
        }
    }

    #[test]
    fn event_name_returns_correct_value() {
        assert_eq!(TestEvent::TurnOn.name(), "TurnOn");
        assert_eq!(TestEvent::TurnOff.name(), "TurnOff");
    }

    #[test]
    fn event_is_comparable() {
        assert_eq!(TestEvent::TurnOn, TestEvent::TurnOn);
        assert_ne!(TestEvent::TurnOn, TestEvent::TurnOff);
    }

    #[test]
    fn event_serializes_correctly() {
        let event = TestEvent::TurnOff;
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: TestEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
