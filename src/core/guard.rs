//! Guard predicates for controlling transition eligibility.
//!
//! Guards are pure boolean functions over an event and read-only instance
//! data. A row whose guard returns false is skipped in favor of later rows
//! with the same (source state, event kind) - ordered guard fallback.

use super::event::Event;

/// Pure predicate that decides whether a matching row is eligible.
///
/// Guards are evaluated during the table scan, after the (source state,
/// event kind) key has already matched. They receive the event (so they
/// can inspect its payload) and a shared reference to the machine's
/// instance data. The `&C` receiver makes mutation impossible, which keeps
/// the fallback scan well-defined.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{Event, Guard};
///
/// #[derive(Debug)]
/// struct CdDetected { title: String }
///
/// #[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// struct CdDetectedKind;
///
/// impl Event for CdDetected {
///     type Kind = CdDetectedKind;
///     fn kind(&self) -> CdDetectedKind { CdDetectedKind }
/// }
///
/// struct Deck { autoplay: bool }
///
/// let is_bad_cd: Guard<CdDetected, Deck> =
///     Guard::new(|event: &CdDetected, _deck: &Deck| event.title.is_empty());
///
/// let deck = Deck { autoplay: false };
/// assert!(is_bad_cd.check(&CdDetected { title: String::new() }, &deck));
/// assert!(!is_bad_cd.check(&CdDetected { title: "louie, louie".into() }, &deck));
/// ```
pub struct Guard<E: Event, C> {
    predicate: Box<dyn Fn(&E, &C) -> bool + Send + Sync>,
}

impl<E: Event, C> Guard<E, C> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&E, &C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check whether the guard admits this event in this context.
    ///
    /// This is a pure function that evaluates the predicate without
    /// any side effects.
    pub fn check(&self, event: &E, context: &C) -> bool {
        (self.predicate)(event, context)
    }
}
