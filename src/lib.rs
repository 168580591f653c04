//! Statecraft: an event-driven finite state machine dispatch library
//!
//! A machine is a table of directed transitions between opaque state
//! values, triggered by opaque event values and gated by predicates.
//! Presenting an event selects at most one transition - the first
//! eligible one in declaration order - runs its actions, and advances the
//! current state. An event nothing matches is silently ignored.
//!
//! # Core Concepts
//!
//! - **State / Event**: type-safe domains via the [`core::State`] and
//!   [`core::Event`] traits
//! - **Guards / Actions**: zero-argument closures gating and reacting to
//!   transitions
//! - **Builder**: fluent, declarative transition construction
//! - **History / Checkpoint**: immutable dispatch log and serializable
//!   snapshots
//!
//! # Example
//!
//! ```rust
//! use statecraft::builder::{StateMachineBuilder, TransitionBuilder};
//! use statecraft::{event_enum, state_enum};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! state_enum! {
//!     enum Lamp {
//!         Off,
//!         On,
//!     }
//! }
//!
//! event_enum! {
//!     enum Switch {
//!         Flick,
//!     }
//! }
//!
//! let flicks = Rc::new(Cell::new(0u32));
//! let counter = Rc::clone(&flicks);
//!
//! let mut lamp = StateMachineBuilder::new()
//!     .initial(Lamp::Off)
//!     .transition(
//!         TransitionBuilder::new()
//!             .from(Lamp::Off)
//!             .to(Lamp::On)
//!             .on(Switch::Flick)
//!             .run(move || counter.set(counter.get() + 1)),
//!     )
//!     .unwrap()
//!     .transition(
//!         TransitionBuilder::new()
//!             .from(Lamp::On)
//!             .to(Lamp::Off)
//!             .on(Switch::Flick),
//!     )
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! lamp.trigger(Switch::Flick);
//! assert_eq!(lamp.current_state(), &Lamp::On);
//! assert_eq!(flicks.get(), 1);
//!
//! lamp.trigger(Switch::Flick);
//! assert_eq!(lamp.current_state(), &Lamp::Off);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod dispatch;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use crate::checkpoint::{Checkpoint, CheckpointError};
pub use crate::core::{Action, DispatchHistory, DispatchRecord, Event, Guard, State};
pub use crate::dispatch::{StateMachine, Transition};
