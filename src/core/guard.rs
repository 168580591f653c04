//! Guard predicates and actions attached to transitions.
//!
//! Guards are zero-argument boolean predicates that gate a transition;
//! actions are zero-argument procedures run when a transition fires. Both
//! are opaque callables supplied by the embedding application and stored
//! type-erased, so one flat transition table can hold heterogeneous
//! closures.

use std::fmt;
use std::rc::Rc;

/// Zero-argument predicate that gates a transition.
///
/// A transition is only eligible for dispatch if every one of its guards
/// returns `true`. Guards are conceptually pure: they read state they
/// close over and decide. Nothing prevents a guard from mutating captured
/// state through interior mutability — evaluation order and
/// short-circuiting are well-defined and observable — but correctness must
/// not depend on it.
///
/// Guards are cheap to clone; clones share the underlying callable.
///
/// # Example
///
/// ```rust
/// use statecraft::core::Guard;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let ready = Rc::new(Cell::new(false));
///
/// let ready_ref = Rc::clone(&ready);
/// let guard = Guard::new(move || ready_ref.get());
///
/// assert!(!guard.check());
/// ready.set(true);
/// assert!(guard.check());
/// ```
#[derive(Clone)]
pub struct Guard {
    predicate: Rc<dyn Fn() -> bool>,
}

impl Guard {
    /// Create a guard from a zero-argument predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Guard {
            predicate: Rc::new(predicate),
        }
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

impl PartialEq for Guard {
    /// Guards compare by callable identity: clones of one guard are equal,
    /// two independently constructed guards are not, even if built from
    /// identical closures.
    fn eq(&self, other: &Self) -> bool {
        Rc::as_ptr(&self.predicate) as *const () == Rc::as_ptr(&other.predicate) as *const ()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

/// Zero-argument procedure run when a transition fires.
///
/// Actions are where side effects live: incrementing counters, notifying
/// collaborators, triggering another machine. An action receives nothing
/// and returns nothing; everything it touches, it touches through its
/// captures.
///
/// Actions are cheap to clone; clones share the underlying callable.
///
/// # Example
///
/// ```rust
/// use statecraft::core::Action;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let count = Rc::new(Cell::new(0u32));
///
/// let count_ref = Rc::clone(&count);
/// let action = Action::new(move || count_ref.set(count_ref.get() + 1));
///
/// action.run();
/// action.run();
/// assert_eq!(count.get(), 2);
/// ```
#[derive(Clone)]
pub struct Action {
    effect: Rc<dyn Fn()>,
}

impl Action {
    /// Create an action from a zero-argument procedure.
    pub fn new<F>(effect: F) -> Self
    where
        F: Fn() + 'static,
    {
        Action {
            effect: Rc::new(effect),
        }
    }

    /// Execute the procedure.
    pub fn run(&self) {
        (self.effect)()
    }
}

impl PartialEq for Action {
    /// Actions compare by callable identity, like [`Guard`].
    fn eq(&self, other: &Self) -> bool {
        Rc::as_ptr(&self.effect) as *const () == Rc::as_ptr(&other.effect) as *const ()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}
