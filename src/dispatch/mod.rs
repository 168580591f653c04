//! Event dispatch over a fixed transition table.
//!
//! This module is the imperative shell around the value types in
//! [`crate::core`]: a [`StateMachine`] owns an ordered table of
//! [`Transition`]s and a current state, and
//! [`trigger`](StateMachine::trigger) selects and fires at most one
//! transition per call.
//!
//! # Dispatch contract
//!
//! - The table is scanned in declaration order; the first eligible
//!   transition wins and nothing after it is evaluated.
//! - A transition is eligible when its source matches the current state,
//!   its event matches the presented event, and all of its guards hold.
//! - Actions run in declared order before the state advances.
//! - An event with no eligible transition is silently ignored.

mod machine;
mod transition;

pub use machine::StateMachine;
pub use transition::Transition;
