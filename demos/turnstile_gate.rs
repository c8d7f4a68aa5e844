//! Turnstile Gate State Machine
//!
//! This example demonstrates a minimal two-state cyclic machine with a
//! payload-carrying event and a guard on the payload.
//!
//! Key concepts:
//! - Cyclic state transitions (no terminal state)
//! - Guard on event payload (the coin must cover the fare)
//! - Outcome reporting for ignored events
//!
//! Run with: cargo run --example turnstile_gate

use std::sync::Arc;
use turnstile::builder::{simple_row, RowBuilder};
use turnstile::{event_enum, state_enum, StateMachine, TransitionTable};

state_enum! {
    enum Gate {
        Locked,
        Unlocked,
    }
}

event_enum! {
    enum GateEvent {
        Coin(u32),
        Push,
    }
    kind: GateEventKind
}

const FARE: u32 = 25;

fn main() {
    let table: TransitionTable<Gate, GateEvent, u32> = TransitionTable::builder()
        .add_row(
            RowBuilder::new()
                .from(Gate::Locked)
                .on(GateEventKind::Coin)
                .to(Gate::Unlocked)
                .when(|event, _fares: &u32| matches!(event, GateEvent::Coin(v) if *v >= FARE))
                .build()
                .unwrap(),
        )
        .add_row(
            RowBuilder::new()
                .from(Gate::Unlocked)
                .on(GateEventKind::Push)
                .to(Gate::Locked)
                .action(|_event, fares| *fares += 1)
                .build()
                .unwrap(),
        )
        .add_row(simple_row(Gate::Unlocked, GateEventKind::Coin, Gate::Unlocked))
        .build()
        .unwrap();

    let mut gate = StateMachine::new(Arc::new(table), Gate::Locked, 0u32);

    println!("=== Turnstile Gate ===\n");
    println!("Initial state: {:?}", gate.current_state());

    let outcome = gate.process_event(&GateEvent::Coin(10));
    println!("Coin(10):  {outcome:?}");

    let outcome = gate.process_event(&GateEvent::Push);
    println!("Push:      {outcome:?}");

    let outcome = gate.process_event(&GateEvent::Coin(25));
    println!("Coin(25):  {outcome:?}");

    let outcome = gate.process_event(&GateEvent::Push);
    println!("Push:      {outcome:?}");

    println!("\nFares collected: {}", gate.context());
    println!("Final state: {:?}", gate.current_state());

    println!("\n=== Example Complete ===");
}
