//! Builder for constructing table rows.

use crate::builder::error::BuildError;
use crate::core::{Action, Event, Guard, State};
use crate::table::Row;

/// Builder for constructing rows with a fluent API.
///
/// `from`, `on` and `to` are required; guard and action are optional.
pub struct RowBuilder<S: State, E: Event, C> {
    source: Option<S>,
    kind: Option<E::Kind>,
    target: Option<S>,
    guard: Option<Guard<E, C>>,
    action: Option<Action<E, C>>,
}

impl<S: State, E: Event, C> RowBuilder<S, E, C> {
    /// Create a new row builder.
    pub fn new() -> Self {
        Self {
            source: None,
            kind: None,
            target: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.source = Some(state);
        self
    }

    /// Set the event kind this row responds to (required).
    pub fn on(mut self, kind: E::Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.target = Some(state);
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard<E, C>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&E, &C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set the action using a closure (optional).
    pub fn action<F>(mut self, effect: F) -> Self
    where
        F: Fn(&E, &mut C) + Send + Sync + 'static,
    {
        self.action = Some(Action::new(effect));
        self
    }

    /// Build the row.
    pub fn build(self) -> Result<Row<S, E, C>, BuildError> {
        let source = self.source.ok_or(BuildError::MissingSourceState)?;
        let kind = self.kind.ok_or(BuildError::MissingEventKind)?;
        let target = self.target.ok_or(BuildError::MissingTargetState)?;

        Ok(Row {
            source,
            kind,
            target,
            guard: self.guard,
            action: self.action,
        })
    }
}

impl<S: State, E: Event, C> Default for RowBuilder<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}
