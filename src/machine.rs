//! The dispatch engine: a machine instance driven by a shared table.

use crate::core::{Event, State, StateHistory, StateTransition};
use crate::table::TransitionTable;
use chrono::Utc;
use std::sync::Arc;

/// Result of submitting one event to a machine.
///
/// Ignoring an event is not an error: it simply means no row's key
/// matched, or every matching row's guard returned false.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<S: State> {
    /// A row was selected; its action ran and the state was updated
    Transitioned {
        /// State before the transition
        from: S,
        /// State after the transition
        to: S,
    },

    /// No eligible row; the event was silently absorbed
    Ignored,
}

impl<S: State> Outcome<S> {
    /// Whether a transition occurred.
    pub fn transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// The resulting state, if a transition occurred.
    pub fn new_state(&self) -> Option<&S> {
        match self {
            Self::Transitioned { to, .. } => Some(to),
            Self::Ignored => None,
        }
    }
}

/// A state machine instance dispatching over a shared transition table.
///
/// The machine exclusively owns its mutable state: the current [`State`]
/// (single-writer - only the machine itself changes it) and the
/// caller-supplied context holding any domain data that guards read and
/// actions mutate. The table is shared read-only and outlives every
/// machine built against it.
///
/// Dispatch is synchronous and single-threaded: [`process_event`] runs
/// guard evaluation, the selected action, and the state update to
/// completion before returning. Submitting events to the same instance
/// from multiple threads requires external serialization; the machine
/// provides no internal locking.
///
/// [`process_event`]: StateMachine::process_event
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use turnstile::builder::simple_row;
/// use turnstile::{state_enum, event_enum, StateMachine, TransitionTable};
///
/// state_enum! {
///     enum Door { Closed, Open }
/// }
///
/// event_enum! {
///     enum DoorEvent { Toggle }
///     kind: DoorEventKind
/// }
///
/// let table: TransitionTable<Door, DoorEvent, ()> = TransitionTable::builder()
///     .add_row(simple_row(Door::Closed, DoorEventKind::Toggle, Door::Open))
///     .add_row(simple_row(Door::Open, DoorEventKind::Toggle, Door::Closed))
///     .build()
///     .unwrap();
///
/// let mut machine = StateMachine::new(Arc::new(table), Door::Closed, ());
///
/// let outcome = machine.process_event(&DoorEvent::Toggle);
/// assert!(outcome.transitioned());
/// assert_eq!(machine.current_state(), &Door::Open);
/// ```
pub struct StateMachine<S: State, E: Event, C> {
    table: Arc<TransitionTable<S, E, C>>,
    current: S,
    context: C,
    history: StateHistory<S>,
}

impl<S: State, E: Event, C> StateMachine<S, E, C> {
    /// Create a machine in the given initial state.
    ///
    /// No transition is executed during construction.
    pub fn new(table: Arc<TransitionTable<S, E, C>>, initial: S, context: C) -> Self {
        Self {
            table,
            current: initial,
            context,
            history: StateHistory::new(),
        }
    }

    pub(crate) fn with_parts(
        table: Arc<TransitionTable<S, E, C>>,
        current: S,
        context: C,
        history: StateHistory<S>,
    ) -> Self {
        Self {
            table,
            current,
            context,
            history,
        }
    }

    /// Get current state (pure).
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the instance-owned domain data (pure).
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Get mutable access to the instance-owned domain data.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Get transition history (pure).
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Get the table this machine dispatches over.
    pub fn table(&self) -> &TransitionTable<S, E, C> {
        &self.table
    }

    /// Submit one event to the machine.
    ///
    /// Scans the table in declaration order and selects the first row
    /// whose (source state, event kind) key matches and whose guard
    /// passes. A matching row with a false guard does not stop the scan -
    /// later rows with the same key are still considered (ordered guard
    /// fallback). The selected row's action runs first, with the event
    /// and mutable context; only after it returns does the machine commit
    /// the target state, so no partial transition is observable.
    ///
    /// If no row is eligible the event is absorbed: state and context are
    /// untouched, no action runs, and [`Outcome::Ignored`] is returned.
    pub fn process_event(&mut self, event: &E) -> Outcome<S> {
        let table = Arc::clone(&self.table);
        let kind = event.kind();

        let selected = table
            .rows()
            .iter()
            .find(|row| row.is_eligible(&self.current, event, &self.context));

        let Some(row) = selected else {
            tracing::trace!(
                state = self.current.name(),
                event = ?kind,
                "no eligible row, event absorbed"
            );
            return Outcome::Ignored;
        };

        if let Some(action) = &row.action {
            action.run(event, &mut self.context);
        }

        let from = std::mem::replace(&mut self.current, row.target.clone());
        self.history = self.history.record(StateTransition {
            from: from.clone(),
            to: self.current.clone(),
            event: format!("{:?}", kind),
            timestamp: Utc::now(),
        });

        tracing::debug!(
            from = from.name(),
            to = self.current.name(),
            event = ?kind,
            "transition executed"
        );

        Outcome::Transitioned {
            from,
            to: self.current.clone(),
        }
    }
}
