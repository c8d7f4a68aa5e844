//! Tagged events submitted to the dispatch engine.
//!
//! An event is a discriminant (its kind) plus an optional, kind-specific
//! payload. The kind participates in table matching; payload contents
//! never do - they are only visible to guards and actions.

use std::fmt::Debug;

/// Trait for events submitted to a state machine.
///
/// Events are immutable once constructed and are not retained by the
/// machine beyond a single `process_event` call. No validation is
/// performed on construction; payload well-formedness (e.g. a non-empty
/// title) is a guard's concern, not the event model's.
///
/// The associated `Kind` type is the dispatch key: a small, fieldless
/// copy type compared for equality against table rows. Two events of the
/// same kind with different payloads match exactly the same rows.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Event;
///
/// #[derive(Debug)]
/// enum PlayerEvent {
///     Play,
///     OpenClose,
///     CdDetected(String),
/// }
///
/// #[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// enum PlayerEventKind {
///     Play,
///     OpenClose,
///     CdDetected,
/// }
///
/// impl Event for PlayerEvent {
///     type Kind = PlayerEventKind;
///
///     fn kind(&self) -> PlayerEventKind {
///         match self {
///             Self::Play => PlayerEventKind::Play,
///             Self::OpenClose => PlayerEventKind::OpenClose,
///             Self::CdDetected(_) => PlayerEventKind::CdDetected,
///         }
///     }
/// }
///
/// let event = PlayerEvent::CdDetected("louie, louie".to_string());
/// assert_eq!(event.kind(), PlayerEventKind::CdDetected);
/// ```
pub trait Event: Debug {
    /// The dispatch discriminant for this event family.
    type Kind: Copy + PartialEq + Debug + Send + Sync;

    /// Get the event's kind tag.
    ///
    /// This is a pure function: the kind depends only on which variant
    /// the event is, never on payload contents.
    fn kind(&self) -> Self::Kind;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum TestEvent {
        Tick,
        Label(String),
    }

    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    enum TestEventKind {
        Tick,
        Label,
    }

    impl Event for TestEvent {
        type Kind = TestEventKind;

        fn kind(&self) -> TestEventKind {
            match self {
                Self::Tick => TestEventKind::Tick,
                Self::Label(_) => TestEventKind::Label,
            }
        }
    }

    #[test]
    fn kind_is_independent_of_payload() {
        let a = TestEvent::Label("one".to_string());
        let b = TestEvent::Label("two".to_string());
        assert_eq!(a.kind(), b.kind());
    }

    #[test]
    fn kinds_distinguish_variants() {
        assert_ne!(TestEvent::Tick.kind(), TestEvent::Label(String::new()).kind());
    }

    #[test]
    fn kind_is_stable() {
        let event = TestEvent::Tick;
        assert_eq!(event.kind(), event.kind());
    }
}
