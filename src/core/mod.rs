//! Core vocabulary types for table-driven state machines.
//!
//! This module contains the pure building blocks the dispatch engine
//! is assembled from:
//! - State definitions via the `State` trait
//! - Tagged events via the `Event` trait
//! - Guard predicates for ordered fallback control
//! - Actions that mutate instance-owned data
//! - Immutable history tracking
//!
//! Nothing in this module performs dispatch on its own; these types are
//! consumed by the transition table and the machine.

mod action;
mod event;
mod guard;
mod history;
mod state;

pub use action::Action;
pub use event::Event;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
