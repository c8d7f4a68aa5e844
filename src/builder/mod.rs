//! Builder API for ergonomic table construction.
//!
//! This module provides fluent builders and macros for declaring
//! transition tables with minimal boilerplate while maintaining type
//! safety.

pub mod error;
pub mod macros;
pub mod row;
pub mod table;

pub use error::BuildError;
pub use row::RowBuilder;
pub use table::TableBuilder;

use crate::core::{Event, State};
use crate::table::Row;

/// Create an unconditional row with no action.
///
/// # Example
///
/// ```
/// use turnstile::builder::simple_row;
/// use turnstile::table::Row;
/// use turnstile::{event_enum, state_enum};
///
/// state_enum! {
///     enum Light { Red, Green }
/// }
///
/// event_enum! {
///     enum LightEvent { Advance }
///     kind: LightEventKind
/// }
///
/// let row: Row<Light, LightEvent, ()> =
///     simple_row(Light::Red, LightEventKind::Advance, Light::Green);
/// ```
pub fn simple_row<S, E, C>(from: S, kind: E::Kind, to: S) -> Row<S, E, C>
where
    S: State,
    E: Event,
{
    RowBuilder::new()
        .from(from)
        .on(kind)
        .to(to)
        .build()
        .expect("Simple row should always build")
}

/// Create a guarded row with no action.
///
/// # Example
///
/// ```
/// use turnstile::builder::guarded_row;
/// use turnstile::table::Row;
/// use turnstile::{event_enum, state_enum};
///
/// state_enum! {
///     enum Gate { Locked, Unlocked }
/// }
///
/// event_enum! {
///     enum GateEvent { Push }
///     kind: GateEventKind
/// }
///
/// struct Till { credit: u32 }
///
/// let row: Row<Gate, GateEvent, Till> = guarded_row(
///     Gate::Locked,
///     GateEventKind::Push,
///     Gate::Unlocked,
///     |_event, till: &Till| till.credit > 0,
/// );
/// ```
pub fn guarded_row<S, E, C, F>(from: S, kind: E::Kind, to: S, guard: F) -> Row<S, E, C>
where
    S: State,
    E: Event,
    F: Fn(&E, &C) -> bool + Send + Sync + 'static,
{
    RowBuilder::new()
        .from(from)
        .on(kind)
        .to(to)
        .when(guard)
        .build()
        .expect("Guarded row should always build")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Locked,
        Unlocked,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Locked => "Locked",
                Self::Unlocked => "Unlocked",
            }
        }
    }

    #[derive(Debug)]
    enum TestEvent {
        Coin(u32),
        Push,
    }

    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    enum TestEventKind {
        Coin,
        Push,
    }

    impl Event for TestEvent {
        type Kind = TestEventKind;

        fn kind(&self) -> TestEventKind {
            match self {
                Self::Coin(_) => TestEventKind::Coin,
                Self::Push => TestEventKind::Push,
            }
        }
    }

    #[test]
    fn simple_row_builds() {
        let row: Row<TestState, TestEvent, ()> = simple_row(
            TestState::Locked,
            TestEventKind::Coin,
            TestState::Unlocked,
        );

        assert_eq!(row.source, TestState::Locked);
        assert_eq!(row.target, TestState::Unlocked);
        assert!(row.is_eligible(&TestState::Locked, &TestEvent::Coin(5), &()));
    }

    #[test]
    fn guarded_row_respects_guard() {
        let row: Row<TestState, TestEvent, ()> = guarded_row(
            TestState::Locked,
            TestEventKind::Coin,
            TestState::Unlocked,
            |event, _ctx| matches!(event, TestEvent::Coin(value) if *value >= 25),
        );

        assert!(row.is_eligible(&TestState::Locked, &TestEvent::Coin(25), &()));
        assert!(!row.is_eligible(&TestState::Locked, &TestEvent::Coin(5), &()));
    }
}
