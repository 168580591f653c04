//! Build errors for state machine and transition builders.

use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Transition source state not specified. Call .from(state)")]
    MissingSourceState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingTargetState,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,
}
