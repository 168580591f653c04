//! State machine holding a transition table and dispatching events.

use crate::core::{DispatchHistory, DispatchRecord, Event, State};
use crate::dispatch::transition::Transition;
use chrono::Utc;

/// A finite state machine over an ordered transition table.
///
/// The machine holds a current state and a table of [`Transition`]s fixed
/// at construction time. Declaration order of the table is significant:
/// it encodes dispatch priority. The current state is the only field that
/// changes over the machine's lifetime, and only
/// [`trigger`](StateMachine::trigger) changes it.
///
/// # Composition
///
/// A guard or action of one machine may capture another machine (through
/// `Rc<RefCell<StateMachine<..>>>`) and read its state or trigger it.
/// This is how controller/subsystem orchestration is built - there is no
/// first-class nesting. Re-entrant triggering of the *same* machine from
/// inside its own dispatch is disallowed: `trigger` takes `&mut self`, so
/// the borrow checker rejects it statically, and going through a shared
/// `RefCell` fails at borrow time.
pub struct StateMachine<S: State, E: Event> {
    initial: S,
    current: S,
    transitions: Vec<Transition<S, E>>,
    history: DispatchHistory<S, E>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a new state machine in the given initial state.
    ///
    /// This is the low-level assembly path; the validating construction
    /// surface is [`StateMachineBuilder`](crate::builder::StateMachineBuilder),
    /// which rejects machines with an empty table.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial.clone(),
            initial,
            transitions: Vec::new(),
            history: DispatchHistory::new(),
        }
    }

    /// Reassemble a machine from checkpointed state and a fresh table.
    pub(crate) fn from_parts(
        initial: S,
        current: S,
        transitions: Vec<Transition<S, E>>,
        history: DispatchHistory<S, E>,
    ) -> Self {
        Self {
            initial,
            current,
            transitions,
            history,
        }
    }

    /// Append a transition to the table.
    ///
    /// Later transitions have lower dispatch priority than earlier ones.
    pub fn add_transition(&mut self, transition: Transition<S, E>) {
        self.transitions.push(transition);
    }

    /// Get the current state.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the state the machine started in.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Check if the machine is in a final state.
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get the dispatch history.
    pub fn history(&self) -> &DispatchHistory<S, E> {
        &self.history
    }

    /// Get the transition table in declaration order.
    pub fn transitions(&self) -> &[Transition<S, E>] {
        &self.transitions
    }

    /// Present an event to the machine.
    ///
    /// The table is scanned in declaration order. A transition is eligible
    /// if its source matches the current state, its event matches the
    /// presented event, and every one of its guards holds (evaluated in
    /// declared order, stopping at the first `false`). The scan stops at
    /// the first eligible transition: ties are resolved purely by
    /// declaration order, and nothing after the match is evaluated.
    ///
    /// If a transition was selected, its actions run in declared order
    /// while the current state still equals the transition's source; the
    /// state advances to the target only after the last action completes.
    /// A panicking guard or action therefore unwinds out of `trigger`
    /// with the state unadvanced.
    ///
    /// If no transition is eligible the call is a no-op: the state is
    /// unchanged, no action runs, nothing is recorded. An unhandled event
    /// is a normal outcome, not an error.
    pub fn trigger(&mut self, event: E) {
        let Some(index) = self
            .transitions
            .iter()
            .position(|t| t.is_eligible(&self.current, &event))
        else {
            return;
        };

        let transition = &self.transitions[index];
        transition.execute_actions();
        let target = transition.target.clone();

        let record = DispatchRecord {
            from: self.current.clone(),
            to: target.clone(),
            event,
            timestamp: Utc::now(),
        };
        self.history = self.history.record(record);
        self.current = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Guard};
    use serde::{Deserialize, Serialize};
    use std::cell::Cell;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum SwitchState {
        Off,
        On,
    }

    impl State for SwitchState {
        fn name(&self) -> &str {
            match self {
                Self::Off => "Off",
                Self::On => "On",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum SwitchEvent {
        TurnOn,
        TurnOff,
    }

    impl Event for SwitchEvent {
        fn name(&self) -> &str {
            match self {
                Self::TurnOn => "TurnOn",
                Self::TurnOff => "TurnOff",
            }
        }
    }

    fn counting_action(count: &Rc<Cell<u32>>) -> Action {
        let count = Rc::clone(count);
        Action::new(move || count.set(count.get() + 1))
    }

    #[test]
    fn trigger_advances_state() {
        let mut machine = StateMachine::new(SwitchState::Off);
        machine.add_transition(Transition {
            source: SwitchState::Off,
            target: SwitchState::On,
            event: SwitchEvent::TurnOn,
            guards: vec![],
            actions: vec![],
        });

        machine.trigger(SwitchEvent::TurnOn);

        assert_eq!(machine.current_state(), &SwitchState::On);
        assert_eq!(machine.initial_state(), &SwitchState::Off);
    }

    #[test]
    fn unhandled_event_is_a_noop() {
        let actions = Rc::new(Cell::new(0u32));

        let mut machine = StateMachine::new(SwitchState::Off);
        machine.add_transition(Transition {
            source: SwitchState::On,
            target: SwitchState::Off,
            event: SwitchEvent::TurnOff,
            guards: vec![],
            actions: vec![counting_action(&actions)],
        });

        machine.trigger(SwitchEvent::TurnOff);

        assert_eq!(machine.current_state(), &SwitchState::Off);
        assert_eq!(actions.get(), 0);
        assert_eq!(machine.history().records().len(), 0);
    }

    #[test]
    fn unhandled_event_is_idempotent() {
        let actions = Rc::new(Cell::new(0u32));

        let mut machine = StateMachine::new(SwitchState::Off);
        machine.add_transition(Transition {
            source: SwitchState::On,
            target: SwitchState::Off,
            event: SwitchEvent::TurnOff,
            guards: vec![],
            actions: vec![counting_action(&actions)],
        });

        for _ in 0..5 {
            machine.trigger(SwitchEvent::TurnOff);
        }

        assert_eq!(machine.current_state(), &SwitchState::Off);
        assert_eq!(actions.get(), 0);
    }

    #[test]
    fn first_match_wins() {
        let first = Rc::new(Cell::new(0u32));
        let second = Rc::new(Cell::new(0u32));

        let mut machine = StateMachine::new(SwitchState::Off);
        machine.add_transition(Transition {
            source: SwitchState::Off,
            target: SwitchState::On,
            event: SwitchEvent::TurnOn,
            guards: vec![],
            actions: vec![counting_action(&first)],
        });
        machine.add_transition(Transition {
            source: SwitchState::Off,
            target: SwitchState::Off,
            event: SwitchEvent::TurnOn,
            guards: vec![],
            actions: vec![counting_action(&second)],
        });

        machine.trigger(SwitchEvent::TurnOn);

        assert_eq!(machine.current_state(), &SwitchState::On);
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn failed_guard_falls_through_to_later_transition() {
        let mut machine = StateMachine::new(SwitchState::Off);
        machine.add_transition(Transition {
            source: SwitchState::Off,
            target: SwitchState::On,
            event: SwitchEvent::TurnOn,
            guards: vec![Guard::new(|| false)],
            actions: vec![],
        });
        machine.add_transition(Transition {
            source: SwitchState::Off,
            target: SwitchState::Off,
            event: SwitchEvent::TurnOn,
            guards: vec![],
            actions: vec![],
        });

        machine.trigger(SwitchEvent::TurnOn);

        assert_eq!(machine.current_state(), &SwitchState::Off);
        assert_eq!(machine.history().records().len(), 1);
    }

    #[test]
    fn blocked_guard_prevents_firing() {
        let actions = Rc::new(Cell::new(0u32));

        let mut machine = StateMachine::new(SwitchState::Off);
        machine.add_transition(Transition {
            source: SwitchState::Off,
            target: SwitchState::On,
            event: SwitchEvent::TurnOn,
            guards: vec![Guard::new(|| false)],
            actions: vec![counting_action(&actions)],
        });

        machine.trigger(SwitchEvent::TurnOn);

        assert_eq!(machine.current_state(), &SwitchState::Off);
        assert_eq!(actions.get(), 0);
    }

    #[test]
    fn guard_flip_controls_firing() {
        let open = Rc::new(Cell::new(true));

        let open_ref = Rc::clone(&open);
        let mut machine = StateMachine::new(SwitchState::Off);
        machine.add_transition(Transition {
            source: SwitchState::Off,
            target: SwitchState::On,
            event: SwitchEvent::TurnOn,
            guards: vec![Guard::new(move || open_ref.get())],
            actions: vec![],
        });
        machine.add_transition(Transition {
            source: SwitchState::On,
            target: SwitchState::Off,
            event: SwitchEvent::TurnOff,
            guards: vec![],
            actions: vec![],
        });

        machine.trigger(SwitchEvent::TurnOn);
        assert_eq!(machine.current_state(), &SwitchState::On);

        machine.trigger(SwitchEvent::TurnOff);
        open.set(false);
        machine.trigger(SwitchEvent::TurnOn);
        assert_eq!(machine.current_state(), &SwitchState::Off);
    }

    #[test]
    fn actions_run_in_declared_order() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        let second = Rc::clone(&order);
        let third = Rc::clone(&order);

        let mut machine = StateMachine::new(SwitchState::Off);
        machine.add_transition(Transition {
            source: SwitchState::Off,
            target: SwitchState::On,
            event: SwitchEvent::TurnOn,
            guards: vec![],
            actions: vec![
                Action::new(move || first.borrow_mut().push("a")),
                Action::new(move || second.borrow_mut().push("b")),
                Action::new(move || third.borrow_mut().push("c")),
            ],
        });

        machine.trigger(SwitchEvent::TurnOn);

        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn panicking_action_leaves_state_unadvanced() {
        let mut machine = StateMachine::new(SwitchState::Off);
        machine.add_transition(Transition {
            source: SwitchState::Off,
            target: SwitchState::On,
            event: SwitchEvent::TurnOn,
            guards: vec![],
            actions: vec![Action::new(|| panic!("action fault"))],
        });

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            machine.trigger(SwitchEvent::TurnOn);
        }));

        assert!(result.is_err());
        assert_eq!(machine.current_state(), &SwitchState::Off);
        assert_eq!(machine.history().records().len(), 0);
    }

    #[test]
    fn fired_transitions_are_recorded() {
        let mut machine = StateMachine::new(SwitchState::Off);
        machine.add_transition(Transition {
            source: SwitchState::Off,
            target: SwitchState::On,
            event: SwitchEvent::TurnOn,
            guards: vec![],
            actions: vec![],
        });
        machine.add_transition(Transition {
            source: SwitchState::On,
            target: SwitchState::Off,
            event: SwitchEvent::TurnOff,
            guards: vec![],
            actions: vec![],
        });

        machine.trigger(SwitchEvent::TurnOn);
        machine.trigger(SwitchEvent::TurnOff);

        let records = machine.history().records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].from, SwitchState::Off);
        assert_eq!(records[0].to, SwitchState::On);
        assert_eq!(records[0].event, SwitchEvent::TurnOn);
        assert_eq!(records[1].event, SwitchEvent::TurnOff);

        let path = machine.history().path();
        assert_eq!(
            path,
            vec![&SwitchState::Off, &SwitchState::On, &SwitchState::Off]
        );
    }
}
