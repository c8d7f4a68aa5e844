//! Property-based tests for table dispatch.
//!
//! These tests use proptest to verify dispatch properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use std::sync::Arc;
use turnstile::builder::{simple_row, RowBuilder};
use turnstile::core::{Event, Guard, State};
use turnstile::{event_enum, state_enum, Outcome, StateMachine, TransitionTable};

state_enum! {
    enum TestState {
        Idle,
        Loading,
        Running,
        Draining,
    }
}

event_enum! {
    enum TestEvent {
        Start,
        Load(u32),
        Drain,
    }
    kind: TestEventKind
}

#[derive(Clone, Default)]
struct TestContext {
    prefer_fast: bool,
    prefer_slow: bool,
    loaded: u32,
}

prop_compose! {
    fn arbitrary_state()(variant in 0..4u8) -> TestState {
        match variant {
            0 => TestState::Idle,
            1 => TestState::Loading,
            2 => TestState::Running,
            _ => TestState::Draining,
        }
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..3u8, payload in 0..1000u32) -> TestEvent {
        match variant {
            0 => TestEvent::Start,
            1 => TestEvent::Load(payload),
            _ => TestEvent::Drain,
        }
    }
}

fn fallback_table() -> Arc<TransitionTable<TestState, TestEvent, TestContext>> {
    // Three rows sharing (Idle, Load): two guarded, one catch-all.
    let table = TransitionTable::builder()
        .add_row(
            RowBuilder::new()
                .from(TestState::Idle)
                .on(TestEventKind::Load)
                .to(TestState::Running)
                .when(|_event, ctx: &TestContext| ctx.prefer_fast)
                .build()
                .unwrap(),
        )
        .add_row(
            RowBuilder::new()
                .from(TestState::Idle)
                .on(TestEventKind::Load)
                .to(TestState::Draining)
                .when(|_event, ctx: &TestContext| ctx.prefer_slow)
                .build()
                .unwrap(),
        )
        .add_row(
            RowBuilder::new()
                .from(TestState::Idle)
                .on(TestEventKind::Load)
                .to(TestState::Loading)
                .action(|event, ctx: &mut TestContext| {
                    if let TestEvent::Load(amount) = event {
                        ctx.loaded = *amount;
                    }
                })
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    Arc::new(table)
}

fn cyclic_table() -> Arc<TransitionTable<TestState, TestEvent, TestContext>> {
    let table = TransitionTable::builder()
        .add_row(simple_row(
            TestState::Idle,
            TestEventKind::Start,
            TestState::Running,
        ))
        .add_row(simple_row(
            TestState::Running,
            TestEventKind::Drain,
            TestState::Draining,
        ))
        .add_row(simple_row(
            TestState::Draining,
            TestEventKind::Start,
            TestState::Idle,
        ))
        .build()
        .unwrap();

    Arc::new(table)
}

proptest! {
    #[test]
    fn guard_is_deterministic(payload in 0..1000u32, fast in any::<bool>()) {
        let guard: Guard<TestEvent, TestContext> =
            Guard::new(|event, ctx: &TestContext| ctx.prefer_fast && matches!(event, TestEvent::Load(v) if *v > 10));

        let event = TestEvent::Load(payload);
        let ctx = TestContext { prefer_fast: fast, ..TestContext::default() };

        prop_assert_eq!(guard.check(&event, &ctx), guard.check(&event, &ctx));
    }

    #[test]
    fn state_name_is_stable(state in arbitrary_state()) {
        let name1 = state.name();
        let name2 = state.name();
        prop_assert_eq!(name1, name2);
    }

    #[test]
    fn event_kind_ignores_payload(payload1 in 0..1000u32, payload2 in 0..1000u32) {
        prop_assert_eq!(
            TestEvent::Load(payload1).kind(),
            TestEvent::Load(payload2).kind()
        );
    }

    #[test]
    fn dispatch_is_deterministic(
        events in prop::collection::vec(arbitrary_event(), 0..20)
    ) {
        let table = cyclic_table();
        let mut a = StateMachine::new(Arc::clone(&table), TestState::Idle, TestContext::default());
        let mut b = StateMachine::new(Arc::clone(&table), TestState::Idle, TestContext::default());

        for event in &events {
            let outcome_a = a.process_event(event);
            let outcome_b = b.process_event(event);
            prop_assert_eq!(outcome_a, outcome_b);
            prop_assert_eq!(a.current_state(), b.current_state());
        }
    }

    #[test]
    fn fallback_selects_first_eligible_row(
        fast in any::<bool>(),
        slow in any::<bool>(),
        payload in 0..1000u32,
    ) {
        let ctx = TestContext {
            prefer_fast: fast,
            prefer_slow: slow,
            loaded: 0,
        };
        let mut machine = StateMachine::new(fallback_table(), TestState::Idle, ctx);

        let outcome = machine.process_event(&TestEvent::Load(payload));

        let expected = if fast {
            TestState::Running
        } else if slow {
            TestState::Draining
        } else {
            TestState::Loading
        };

        prop_assert_eq!(outcome.new_state(), Some(&expected));

        // The catch-all's action runs only when the catch-all is selected.
        let expected_loaded = if fast || slow { 0 } else { payload };
        prop_assert_eq!(machine.context().loaded, expected_loaded);
    }

    #[test]
    fn absorbed_events_never_change_state(
        events in prop::collection::vec(arbitrary_event(), 0..20)
    ) {
        let table = cyclic_table();
        let mut machine =
            StateMachine::new(table, TestState::Idle, TestContext::default());

        for event in &events {
            let before = machine.current_state().clone();
            let outcome = machine.process_event(event);
            if outcome == Outcome::Ignored {
                prop_assert_eq!(machine.current_state(), &before);
            }
        }
    }

    #[test]
    fn history_matches_executed_transitions(
        events in prop::collection::vec(arbitrary_event(), 0..20)
    ) {
        let table = cyclic_table();
        let mut machine =
            StateMachine::new(table, TestState::Idle, TestContext::default());

        let mut executed = 0usize;
        for event in &events {
            if machine.process_event(event).transitioned() {
                executed += 1;
            }
        }

        prop_assert_eq!(machine.history().transitions().len(), executed);

        // History chains: each transition starts where the previous ended.
        let transitions = machine.history().transitions();
        for pair in transitions.windows(2) {
            prop_assert_eq!(&pair[0].to, &pair[1].from);
        }
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
