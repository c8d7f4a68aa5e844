//! Declarative transition tables.
//!
//! A table is an ordered, immutable list of rows. Ordering is semantically
//! significant: during dispatch the machine scans rows in declaration
//! order, and the first row whose key matches and whose guard passes wins.
//! Several rows may share the same (source state, event kind) key - that
//! is the guard-fallback feature, not an error, and the table never tries
//! to detect ambiguous author intent at runtime.

use crate::builder::TableBuilder;
use crate::core::{Action, Event, Guard, State};

/// One entry of a transition table.
///
/// Binds a (source state, event kind) key to a target state, with an
/// optional guard predicate and an optional action. Rows are immutable
/// once built.
pub struct Row<S: State, E: Event, C> {
    /// State the machine must be in for this row to match
    pub source: S,
    /// Event kind this row responds to
    pub kind: E::Kind,
    /// State the machine moves to when this row is selected
    pub target: S,
    /// Optional eligibility predicate; absent means "always true"
    pub guard: Option<Guard<E, C>>,
    /// Optional procedure run when this row is selected
    pub action: Option<Action<E, C>>,
}

impl<S: State, E: Event, C> Row<S, E, C> {
    /// Check whether this row's key matches (pure).
    ///
    /// Key matching looks only at the source state and event kind;
    /// payload contents and guards play no part here.
    pub fn matches(&self, state: &S, kind: E::Kind) -> bool {
        self.source == *state && self.kind == kind
    }

    /// Check whether this row may be selected for the event (pure).
    ///
    /// True when the key matches and the guard passes (or is absent).
    pub fn is_eligible(&self, state: &S, event: &E, context: &C) -> bool {
        self.matches(state, event.kind())
            && self
                .guard
                .as_ref()
                .is_none_or(|g| g.check(event, context))
    }
}

/// Ordered, immutable transition table.
///
/// Built once via [`TableBuilder`], then shared read-only - typically
/// behind an `Arc` - across any number of machines and threads. The table
/// outlives every machine built against it.
pub struct TransitionTable<S: State, E: Event, C> {
    rows: Vec<Row<S, E, C>>,
}

impl<S: State, E: Event, C> TransitionTable<S, E, C> {
    pub(crate) fn from_rows(rows: Vec<Row<S, E, C>>) -> Self {
        Self { rows }
    }

    /// Start building a table.
    pub fn builder() -> TableBuilder<S, E, C> {
        TableBuilder::new()
    }

    /// Get all rows in declaration order.
    pub fn rows(&self) -> &[Row<S, E, C>] {
        &self.rows
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
