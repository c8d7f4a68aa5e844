//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::builder::row::RowBuilder;
use crate::core::{Event, State};
use crate::table::{Row, TransitionTable};

/// Builder for constructing transition tables with a fluent API.
///
/// Rows are kept in the order they were added; that order is the
/// dispatch order.
pub struct TableBuilder<S: State, E: Event, C> {
    rows: Vec<Row<S, E, C>>,
}

impl<S: State, E: Event, C> TableBuilder<S, E, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a row using a builder.
    /// Returns an error if the builder fails validation.
    pub fn row(mut self, builder: RowBuilder<S, E, C>) -> Result<Self, BuildError> {
        let row = builder.build()?;
        self.rows.push(row);
        Ok(self)
    }

    /// Add a pre-built row.
    pub fn add_row(mut self, row: Row<S, E, C>) -> Self {
        self.rows.push(row);
        self
    }

    /// Add multiple rows at once.
    pub fn rows(mut self, rows: Vec<Row<S, E, C>>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Build the table.
    /// Returns an error if no rows were added.
    pub fn build(self) -> Result<TransitionTable<S, E, C>, BuildError> {
        if self.rows.is_empty() {
            return Err(BuildError::EmptyTable);
        }

        Ok(TransitionTable::from_rows(self.rows))
    }
}

impl<S: State, E: Event, C> Default for TableBuilder<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}
