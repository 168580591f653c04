//! Transition records making up a machine's dispatch table.

use crate::core::{Action, Event, Guard, State};

/// A single directed transition between two states.
///
/// A transition binds a source state, a target state, a triggering event,
/// an ordered list of guards, and an ordered list of actions. It is
/// immutable once constructed and owned by exactly one machine's table.
///
/// An empty guard list means the transition is always eligible when source
/// and event match; an empty action list means firing it has no side
/// effect beyond the state change.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<S: State, E: Event> {
    /// State the machine must be in for this transition to be considered
    pub source: S,
    /// State the machine advances to when this transition fires
    pub target: S,
    /// Event that triggers this transition
    pub event: E,
    /// Predicates gating the transition, evaluated in declared order
    pub guards: Vec<Guard>,
    /// Procedures run when the transition fires, in declared order
    pub actions: Vec<Action>,
}

impl<S: State, E: Event> Transition<S, E> {
    /// Check whether this transition can fire for the given current state
    /// and event.
    ///
    /// Guards are only consulted once source and event both match, in
    /// declared order, stopping at the first that returns `false`.
    pub fn is_eligible(&self, current: &S, event: &E) -> bool {
        self.source == *current && self.event == *event && self.check_guards()
    }

    /// Evaluate the guard list in declared order.
    ///
    /// Short-circuits at the first guard that returns `false`; later
    /// guards in the list are not evaluated. An empty list holds
    /// vacuously.
    pub fn check_guards(&self) -> bool {
        self.guards.iter().all(|g| g.check())
    }

    /// Run the action list in declared order.
    pub fn execute_actions(&self) {
        for action in &self.actions {
            action.run();
        }
    }
}
