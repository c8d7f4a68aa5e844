//! Actions executed when a transition row is selected.

use super::event::Event;

/// Procedure executed exactly once when its row is selected.
///
/// Actions receive the event (so they can read its payload) and exclusive
/// access to the machine's instance data. They may mutate that data and
/// perform externally observable effects such as emitting output. Actions
/// are infallible with respect to engine state: they return nothing, and
/// the machine commits the target state only after the action returns, so
/// no partial transition is ever observable.
///
/// Actions cannot re-enter the machine that invoked them: `process_event`
/// holds `&mut self` for the duration of the call.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{Action, Event};
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
/// struct Deck { cd_title: String }
///
/// let store_cd_info: Action<CdDetected, Deck> =
///     Action::new(|event: &CdDetected, deck: &mut Deck| deck.cd_title = event.title.clone());
///
/// let mut deck = Deck { cd_title: String::new() };
/// store_cd_info.run(&CdDetected { title: "louie, louie".into() }, &mut deck);
/// assert_eq!(deck.cd_title, "louie, louie");
/// ```
pub struct Action<E: Event, C> {
    effect: Box<dyn Fn(&E, &mut C) + Send + Sync>,
}

impl<E: Event, C> Action<E, C> {
    /// Create an action from a procedure.
    pub fn new<F>(effect: F) -> Self
    where
        F: Fn(&E, &mut C) + Send + Sync + 'static,
    {
        Action {
            effect: Box::new(effect),
        }
    }

    /// Run the action against the event and instance data.
    pub fn run(&self, event: &E, context: &mut C) {
        (self.effect)(event, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum TestEvent {
        Store(String),
        Clear,
    }

    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    enum TestEventKind {
        Store,
        Clear,
    }

    impl Event for TestEvent {
        type Kind = TestEventKind;

        fn kind(&self) -> TestEventKind {
            match self {
                Self::Store(_) => TestEventKind::Store,
                Self::Clear => TestEventKind::Clear,
            }
        }
    }

    struct TestContext {
        title: String,
        runs: usize,
    }

    #[test]
    fn action_mutates_instance_data() {
        let action: Action<TestEvent, TestContext> = Action::new(|event, ctx: &mut TestContext| {
            if let TestEvent::Store(title) = event {
                ctx.title = title.clone();
            }
            ctx.runs += 1;
        });

        let mut ctx = TestContext {
            title: String::new(),
            runs: 0,
        };

        action.run(&TestEvent::Store("louie, louie".to_string()), &mut ctx);

        assert_eq!(ctx.title, "louie, louie");
        assert_eq!(ctx.runs, 1);
    }

    #[test]
    fn action_runs_once_per_invocation() {
        let action: Action<TestEvent, TestContext> = Action::new(|_event, ctx: &mut TestContext| ctx.runs += 1);

        let mut ctx = TestContext {
            title: String::new(),
            runs: 0,
        };

        action.run(&TestEvent::Clear, &mut ctx);
        action.run(&TestEvent::Clear, &mut ctx);

        assert_eq!(ctx.runs, 2);
    }
}
