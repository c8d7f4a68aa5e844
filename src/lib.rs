//! Turnstile: a table-driven finite state machine library
//!
//! Turnstile dispatches events over a declarative transition table: an
//! ordered list of rows binding (source state, event kind) to a target
//! state with an optional guard predicate and an optional action. Rows
//! are scanned in declaration order; a matching row whose guard returns
//! false does not stop the scan, so later rows with the same key act as
//! fallbacks. The first eligible row wins, its action runs against the
//! machine's instance data, and the machine commits the target state.
//! Events with no eligible row are absorbed without error.
//!
//! # Core Concepts
//!
//! - **State**: one value from a closed enumeration, via the `State` trait
//! - **Event**: a tagged input with a kind and optional payload
//! - **Row**: one table entry, with optional guard and action
//! - **Guard**: a pure predicate; false guards trigger ordered fallback
//! - **Outcome**: whether an event transitioned the machine or was ignored
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use turnstile::builder::{simple_row, RowBuilder};
//! use turnstile::{event_enum, state_enum, StateMachine, TransitionTable};
//!
//! state_enum! {
//!     enum DeckState {
//!         Empty,
//!         Open,
//!         Stopped,
//!     }
//! }
//!
//! event_enum! {
//!     enum DeckEvent {
//!         OpenClose,
//!         CdDetected(String),
//!     }
//!     kind: DeckEventKind
//! }
//!
//! struct Deck {
//!     cd_title: String,
//! }
//!
//! let table: TransitionTable<DeckState, DeckEvent, Deck> = TransitionTable::builder()
//!     .add_row(simple_row(DeckState::Empty, DeckEventKind::OpenClose, DeckState::Open))
//!     .add_row(simple_row(DeckState::Open, DeckEventKind::OpenClose, DeckState::Empty))
//!     .add_row(
//!         RowBuilder::new()
//!             .from(DeckState::Empty)
//!             .on(DeckEventKind::CdDetected)
//!             .to(DeckState::Stopped)
//!             .action(|event, deck: &mut Deck| {
//!                 if let DeckEvent::CdDetected(title) = event {
//!                     deck.cd_title = title.clone();
//!                 }
//!             })
//!             .build()
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let deck = Deck { cd_title: String::new() };
//! let mut machine = StateMachine::new(Arc::new(table), DeckState::Empty, deck);
//!
//! let outcome = machine.process_event(&DeckEvent::CdDetected("louie, louie".to_string()));
//! assert!(outcome.transitioned());
//! assert_eq!(machine.current_state(), &DeckState::Stopped);
//! assert_eq!(machine.context().cd_title, "louie, louie");
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod snapshot;
pub mod table;

// Re-export commonly used types
pub use builder::{guarded_row, simple_row, BuildError, RowBuilder, TableBuilder};
pub use core::{Action, Event, Guard, State, StateHistory, StateTransition};
pub use machine::{Outcome, StateMachine};
pub use snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};
pub use table::{Row, TransitionTable};
