//! Composite Machines
//!
//! This example demonstrates controller/subsystem orchestration: one
//! machine's actions trigger another machine, and its guards read the
//! other machine's state. There is no first-class nesting - composition
//! is plain closures capturing a shared machine.
//!
//! Key concepts:
//! - Actions that trigger a second machine
//! - Guards that read a second machine's state
//! - Sharing a machine through Rc<RefCell<..>>
//!
//! Run with: cargo run --example composite

use statecraft::builder::{simple_transition, StateMachineBuilder, TransitionBuilder};
use statecraft::{event_enum, state_enum};
use std::cell::RefCell;
use std::rc::Rc;

state_enum! {
    enum Controller {
        Off,
        On,
    }
}

event_enum! {
    enum ControlEvent {
        TurnOn,
        TurnOff,
    }
}

state_enum! {
    enum Pump {
        Off,
        Idle,
        Running,
    }
}

event_enum! {
    enum PumpEvent {
        TurnOn,
        Run,
        Finish,
        TurnOff,
    }
}

fn main() {
    println!("=== Controller and Pump ===\n");

    let pump = Rc::new(RefCell::new(
        StateMachineBuilder::new()
            .initial(Pump::Off)
            .transitions(vec![
                simple_transition(Pump::Off, Pump::Idle, PumpEvent::TurnOn),
                simple_transition(Pump::Idle, Pump::Running, PumpEvent::Run),
                simple_transition(Pump::Running, Pump::Idle, PumpEvent::Finish),
                simple_transition(Pump::Idle, Pump::Off, PumpEvent::TurnOff),
            ])
            .build()
            .unwrap(),
    ));

    let start_pump = Rc::clone(&pump);
    let pump_is_idle = Rc::clone(&pump);
    let stop_pump = Rc::clone(&pump);

    let mut controller = StateMachineBuilder::new()
        .initial(Controller::Off)
        .transition(
            TransitionBuilder::new()
                .from(Controller::Off)
                .to(Controller::On)
                .on(ControlEvent::TurnOn)
                .run(move || start_pump.borrow_mut().trigger(PumpEvent::TurnOn)),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .from(Controller::On)
                .to(Controller::Off)
                .on(ControlEvent::TurnOff)
                .when(move || *pump_is_idle.borrow().current_state() == Pump::Idle)
                .run(move || stop_pump.borrow_mut().trigger(PumpEvent::TurnOff)),
        )
        .unwrap()
        .build()
        .unwrap();

    let report = |controller: &statecraft::StateMachine<Controller, ControlEvent>,
                  pump: &Rc<RefCell<statecraft::StateMachine<Pump, PumpEvent>>>| {
        println!(
            "  controller: {:?}, pump: {:?}",
            controller.current_state(),
            pump.borrow().current_state()
        );
    };

    println!("Turning controller on (starts the pump):");
    controller.trigger(ControlEvent::TurnOn);
    report(&controller, &pump);

    println!("Pump picks up work:");
    pump.borrow_mut().trigger(PumpEvent::Run);
    report(&controller, &pump);

    println!("Trying to turn controller off while the pump is running:");
    controller.trigger(ControlEvent::TurnOff);
    report(&controller, &pump);

    println!("Pump finishes its work:");
    pump.borrow_mut().trigger(PumpEvent::Finish);
    report(&controller, &pump);

    println!("Turning controller off (stops the pump):");
    controller.trigger(ControlEvent::TurnOff);
    report(&controller, &pump);
}
