//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, Event, Guard, State};
use crate::dispatch::Transition;

/// Partially-specified transition with a fluent API.
///
/// Each method consumes the builder and returns it with exactly one field
/// replaced, all others preserved; a later call to the same method
/// discards the earlier value. The builder is `Clone`, so a populated
/// value can serve as a template for several similar transitions, and
/// `PartialEq`, comparing every field (guards and actions by callable
/// identity).
///
/// [`build`](TransitionBuilder::build) requires source, target, and event.
/// Guards and actions start out as empty lists: a transition built without
/// them is always eligible and has no side effect.
///
/// # Example
///
/// ```rust
/// use statecraft::builder::TransitionBuilder;
/// use statecraft::{event_enum, state_enum};
///
/// state_enum! {
///     enum Door { Closed, Open }
/// }
///
/// event_enum! {
///     enum Push { Push }
/// }
///
/// let transition = TransitionBuilder::new()
///     .from(Door::Closed)
///     .to(Door::Open)
///     .on(Push::Push)
///     .build()
///     .unwrap();
///
/// assert_eq!(transition.source, Door::Closed);
/// assert!(transition.guards.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionBuilder<S: State, E: Event> {
    source: Option<S>,
    target: Option<S>,
    event: Option<E>,
    guards: Vec<Guard>,
    actions: Vec<Action>,
}

impl<S: State, E: Event> TransitionBuilder<S, E> {
    /// Create a new transition builder with nothing specified.
    pub fn new() -> Self {
        Self {
            source: None,
            target: None,
            event: None,
            guards: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.source = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.target = Some(state);
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: E) -> Self {
        self.event = Some(event);
        self
    }

    /// Set a single guard, replacing any previously set guard list.
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guards = vec![guard];
        self
    }

    /// Set the guard list, replacing any previously set one.
    ///
    /// Guards are evaluated in the order given here.
    pub fn guards<I>(mut self, guards: I) -> Self
    where
        I: IntoIterator<Item = Guard>,
    {
        self.guards = guards.into_iter().collect();
        self
    }

    /// Set a single guard from a closure, replacing any previously set
    /// guard list.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Set a single action, replacing any previously set action list.
    pub fn action(mut self, action: Action) -> Self {
        self.actions = vec![action];
        self
    }

    /// Set the action list, replacing any previously set one.
    ///
    /// Actions execute in the order given here.
    pub fn actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        self.actions = actions.into_iter().collect();
        self
    }

    /// Set a single action from a closure, replacing any previously set
    /// action list.
    pub fn run<F>(self, effect: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.action(Action::new(effect))
    }

    /// Build the transition.
    ///
    /// Fails if source, target, or event was never set. This is a
    /// construction-time error, never a dispatch-time one.
    pub fn build(self) -> Result<Transition<S, E>, BuildError> {
        let source = self.source.ok_or(BuildError::MissingSourceState)?;
        let target = self.target.ok_or(BuildError::MissingTargetState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;

        Ok(Transition {
            source,
            target,
            event,
            guards: self.guards,
            actions: self.actions,
        })
    }
}

impl<S: State, E: Event> Default for TransitionBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
