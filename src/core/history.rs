//! State transition history tracking.
//!
//! Provides immutable tracking of executed transitions over time. The
//! machine records one entry per selected row; absorbed events leave no
//! trace here.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single executed transition.
///
/// Transitions are immutable values representing a move from one state
/// to another, triggered by an event of a given kind, at a specific
/// point in time.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{State, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DeckState { Empty, Stopped }
///
/// impl State for DeckState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Empty => "Empty",
///             Self::Stopped => "Stopped",
///         }
///     }
/// }
///
/// let transition = StateTransition {
///     from: DeckState::Empty,
///     to: DeckState::Stopped,
///     event: "CdDetected".to_string(),
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Debug name of the event kind that triggered the transition
    pub event: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of executed transitions.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the transition added.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the first transition's
    /// source, then the `to` state of each transition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::core::{State, StateHistory, StateTransition};
    /// use serde::{Deserialize, Serialize};
    /// use chrono::Utc;
    ///
    /// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    /// enum Phase { One, Two, Three }
    ///
    /// impl State for Phase {
    ///     fn name(&self) -> &str {
    ///         match self {
    ///             Self::One => "One",
    ///             Self::Two => "Two",
    ///             Self::Three => "Three",
    ///         }
    ///     }
    /// }
    ///
    /// let mut history = StateHistory::new();
    ///
    /// history = history.record(StateTransition {
    ///     from: Phase::One,
    ///     to: Phase::Two,
    ///     event: "Step".to_string(),
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// history = history.record(StateTransition {
    ///     from: Phase::Two,
    ///     to: Phase::Three,
    ///     event: "Step".to_string(),
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// let path = history.get_path();
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path[0], &Phase::One);
    /// assert_eq!(path[1], &Phase::Two);
    /// assert_eq!(path[2], &Phase::Three);
    /// ```
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions. Otherwise returns
    /// the duration between the first and last transition timestamps.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    ///
    /// Returns a slice of all recorded transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
