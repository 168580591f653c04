//! Core State trait for state machine states.
//!
//! All state machine states must implement this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// A state is an opaque, equality-comparable value describing the current
/// position of a machine. States carry no machine-internal structure and
/// are owned by value.
///
/// # Required Traits
///
/// - `Clone`: states are copied into dispatch records
/// - `PartialEq`: states are compared during dispatch
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for checkpoints
///
/// # Example
///
/// ```rust
/// use statecraft::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum LampState {
///     Off,
///     On,
///     Burnt,
/// }
///
/// impl State for LampState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///             Self::Burnt => "Burnt",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Burnt)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Burnt)
///     }
/// }
/// ```
pub trait State: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> {
    /// Get the state's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states represent completion points in the state machine
    /// where no further transitions are expected.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Error states represent failure conditions in the state machine.
    /// They are typically also final states, but this is not enforced.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
