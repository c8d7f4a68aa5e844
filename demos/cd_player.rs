//! CD Player State Machine
//!
//! This example demonstrates ordered guard fallback: three rows share the
//! (Empty, CdDetected) key, and the first whose guard passes wins.
//!
//! Key concepts:
//! - A declarative transition table shared behind an Arc
//! - Guards reading the event payload and instance data
//! - Actions mutating instance-owned data (the cached CD title)
//! - Silent absorption of events with no eligible row
//!
//! Run with: cargo run --example cd_player

use std::sync::Arc;
use turnstile::builder::{simple_row, RowBuilder};
use turnstile::{event_enum, state_enum, StateMachine, TransitionTable};

state_enum! {
    enum PlayerState {
        Stopped,
        Open,
        Empty,
        Playing,
        Paused,
    }
}

event_enum! {
    enum PlayerEvent {
        Play,
        OpenClose,
        CdDetected(String),
        Stop,
        Pause,
    }
    kind: PlayerEventKind
}

#[derive(Default)]
struct Player {
    cd_title: String,
    autoplay: bool,
}

fn player_table() -> Arc<TransitionTable<PlayerState, PlayerEvent, Player>> {
    use PlayerEventKind as K;
    use PlayerState as S;

    let table = TransitionTable::builder()
        .add_row(
            RowBuilder::new()
                .from(S::Stopped)
                .on(K::Play)
                .to(S::Playing)
                .action(|_e, _p| println!("Starting playback"))
                .build()
                .unwrap(),
        )
        .add_row(
            RowBuilder::new()
                .from(S::Stopped)
                .on(K::OpenClose)
                .to(S::Open)
                .action(|_e, p: &mut Player| {
                    println!("Opening drawer");
                    p.cd_title.clear();
                })
                .build()
                .unwrap(),
        )
        .add_row(
            RowBuilder::new()
                .from(S::Open)
                .on(K::OpenClose)
                .to(S::Empty)
                .action(|_e, _p| println!("Closing drawer"))
                .build()
                .unwrap(),
        )
        .add_row(
            RowBuilder::new()
                .from(S::Empty)
                .on(K::OpenClose)
                .to(S::Open)
                .action(|_e, p: &mut Player| {
                    println!("Opening drawer");
                    p.cd_title.clear();
                })
                .build()
                .unwrap(),
        )
        .add_row(
            RowBuilder::new()
                .from(S::Empty)
                .on(K::CdDetected)
                .to(S::Open)
                .when(|e, _p: &Player| matches!(e, PlayerEvent::CdDetected(t) if t.is_empty()))
                .action(|_e, p: &mut Player| {
                    println!("Ejecting bad CD");
                    p.cd_title.clear();
                })
                .build()
                .unwrap(),
        )
        .add_row(
            RowBuilder::new()
                .from(S::Empty)
                .on(K::CdDetected)
                .to(S::Playing)
                .when(|_e, p: &Player| p.autoplay)
                .action(|e, p| {
                    if let PlayerEvent::CdDetected(title) = e {
                        println!("Starting playback of '{title}'");
                        p.cd_title = title.clone();
                    }
                })
                .build()
                .unwrap(),
        )
        .add_row(
            RowBuilder::new()
                .from(S::Empty)
                .on(K::CdDetected)
                .to(S::Stopped)
                .action(|e, p: &mut Player| {
                    if let PlayerEvent::CdDetected(title) = e {
                        println!("Detected CD '{title}'");
                        p.cd_title = title.clone();
                    }
                })
                .build()
                .unwrap(),
        )
        .add_row(simple_row(S::Playing, K::Stop, S::Stopped))
        .add_row(simple_row(S::Playing, K::Pause, S::Paused))
        .add_row(
            RowBuilder::new()
                .from(S::Playing)
                .on(K::OpenClose)
                .to(S::Open)
                .action(|_e, p: &mut Player| {
                    println!("Stopping and opening drawer");
                    p.cd_title.clear();
                })
                .build()
                .unwrap(),
        )
        .add_row(simple_row(S::Paused, K::Play, S::Playing))
        .add_row(simple_row(S::Paused, K::Stop, S::Stopped))
        .add_row(
            RowBuilder::new()
                .from(S::Paused)
                .on(K::OpenClose)
                .to(S::Open)
                .action(|_e, p: &mut Player| {
                    println!("Stopping and opening drawer");
                    p.cd_title.clear();
                })
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    Arc::new(table)
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== CD Player State Machine ===\n");

    let mut player = StateMachine::new(player_table(), PlayerState::Empty, Player::default());
    println!("Initial state: {:?}\n", player.current_state());

    // A CD with no title hits the bad-CD guard and is ejected.
    player.process_event(&PlayerEvent::CdDetected(String::new()));
    player.process_event(&PlayerEvent::OpenClose);

    // A titled CD falls through both guards to the catch-all row.
    player.process_event(&PlayerEvent::CdDetected("louie, louie".to_string()));
    println!("Cached title: '{}'", player.context().cd_title);

    player.process_event(&PlayerEvent::Play);
    player.process_event(&PlayerEvent::Pause);
    player.process_event(&PlayerEvent::Stop);

    // No row handles Play while the drawer is empty; the event is absorbed.
    player.process_event(&PlayerEvent::OpenClose);
    player.process_event(&PlayerEvent::OpenClose);
    let outcome = player.process_event(&PlayerEvent::Play);
    println!("\nPlay with empty drawer: {outcome:?}");

    println!("\nStates visited:");
    for state in player.history().get_path() {
        println!("  {state:?}");
    }

    println!("\n=== Example Complete ===");
}
