//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for defining
//! transitions and assembling machines with minimal boilerplate. A
//! transition reads like its own description:
//!
//! ```text
//! TransitionBuilder::new()
//!     .from(Lamp::Off)
//!     .to(Lamp::On)
//!     .on(Switch::Flick)
//!     .when(|| power_is_up())
//!     .run(|| log_switch_on())
//! ```
//!
//! No inheritance or dynamic dispatch is involved - a builder is a plain
//! value, and building it produces a plain [`Transition`] value.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, Guard, State};
use crate::dispatch::Transition;

/// Create an unguarded transition with no actions.
///
/// # Example
///
/// ```
/// use statecraft::builder::simple_transition;
/// use statecraft::{event_enum, state_enum};
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
///     final: [End]
/// }
///
/// event_enum! {
///     enum MyEvent {
///         Go,
///     }
/// }
///
/// let transition = simple_transition(MyState::Start, MyState::End, MyEvent::Go);
/// assert!(transition.is_eligible(&MyState::Start, &MyEvent::Go));
/// ```
pub fn simple_transition<S, E>(source: S, target: S, event: E) -> Transition<S, E>
where
    S: State,
    E: Event,
{
    TransitionBuilder::new()
        .from(source)
        .to(target)
        .on(event)
        .build()
        .expect("transition with source, target, and event always builds")
}

/// Create a transition gated by a single guard predicate.
///
/// # Example
///
/// ```
/// use statecraft::builder::guarded_transition;
/// use statecraft::{event_enum, state_enum};
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
///     final: [End]
/// }
///
/// event_enum! {
///     enum MyEvent {
///         Go,
///     }
/// }
///
/// let transition = guarded_transition(MyState::Start, MyState::End, MyEvent::Go, || true);
/// assert!(transition.is_eligible(&MyState::Start, &MyEvent::Go));
/// ```
pub fn guarded_transition<S, E, F>(source: S, target: S, event: E, predicate: F) -> Transition<S, E>
where
    S: State,
    E: Event,
    F: Fn() -> bool + 'static,
{
    TransitionBuilder::new()
        .from(source)
        .to(target)
        .on(event)
        .guard(Guard::new(predicate))
        .build()
        .expect("transition with source, target, and event always builds")
}
