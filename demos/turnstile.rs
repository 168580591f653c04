//! Turnstile State Machine
//!
//! This example demonstrates guarded dispatch with observable side effects.
//!
//! Key concepts:
//! - Event-triggered transitions
//! - Guard predicates gating a transition
//! - Actions with captured counters
//! - Unhandled events as silent no-ops
//!
//! Run with: cargo run --example turnstile

use statecraft::builder::{StateMachineBuilder, TransitionBuilder};
use statecraft::{event_enum, state_enum};
use std::cell::Cell;
use std::rc::Rc;

state_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
    }
}

event_enum! {
    enum Visitor {
        Coin,
        Push,
    }
}

fn main() {
    println!("=== Turnstile State Machine ===\n");

    let entries = Rc::new(Cell::new(0u32));
    let accepting_coins = Rc::new(Cell::new(true));

    let accepting = Rc::clone(&accepting_coins);
    let entered = Rc::clone(&entries);

    let mut turnstile = StateMachineBuilder::new()
        .initial(Turnstile::Locked)
        .transition(
            TransitionBuilder::new()
                .from(Turnstile::Locked)
                .to(Turnstile::Unlocked)
                .on(Visitor::Coin)
                .when(move || accepting.get())
                .run(|| println!("  coin accepted, unlocking")),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .from(Turnstile::Unlocked)
                .to(Turnstile::Locked)
                .on(Visitor::Push)
                .run(move || {
                    entered.set(entered.get() + 1);
                    println!("  visitor pushed through");
                }),
        )
        .unwrap()
        .build()
        .unwrap();

    println!("Initial state: {:?}\n", turnstile.current_state());

    println!("Pushing while locked (no transition matches):");
    turnstile.trigger(Visitor::Push);
    println!("  state: {:?}\n", turnstile.current_state());

    println!("Inserting a coin:");
    turnstile.trigger(Visitor::Coin);
    println!("  state: {:?}\n", turnstile.current_state());

    println!("Pushing through:");
    turnstile.trigger(Visitor::Push);
    println!("  state: {:?}\n", turnstile.current_state());

    println!("Coin slot out of service, inserting a coin:");
    accepting_coins.set(false);
    turnstile.trigger(Visitor::Coin);
    println!("  state: {:?}\n", turnstile.current_state());

    println!("Entries: {}", entries.get());
    println!("Transitions fired: {}", turnstile.history().records().len());
}
