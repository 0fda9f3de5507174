//! Property tests for eligibility and deck traversal.

use flashdeck_core::{Difficulty, Event, Item, ItemId, ReviewRecord, ReviewStore, Session};
use proptest::prelude::*;

/// Keeps `now + interval` far from `u64::MAX`.
const MAX_NOW: u64 = 1 << 50;

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Good),
        Just(Difficulty::Difficult),
        Just(Difficulty::Repeat),
    ]
}

#[derive(Debug, Clone)]
enum Action {
    Advance,
    Retreat,
    Reshuffle,
    Rate(Difficulty),
    Wait(u64),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => Just(Action::Advance),
        2 => Just(Action::Retreat),
        1 => Just(Action::Reshuffle),
        3 => difficulty().prop_map(Action::Rate),
        2 => (0u64..2 * 86_400_000).prop_map(Action::Wait),
    ]
}

fn items(n: u64) -> Vec<Item> {
    (1..=n).map(|i| Item::new(i, format!("item {i}"))).collect()
}

proptest! {
    #[test]
    fn unrated_record_is_always_eligible(now in any::<u64>()) {
        prop_assert!(ReviewStore::is_eligible(&ReviewRecord::new(), now));
    }

    #[test]
    fn rated_record_is_due_exactly_after_interval(
        d in difficulty(),
        now in 0..MAX_NOW,
        offset in 0u64..20 * 86_400_000,
    ) {
        let mut store = ReviewStore::new(items(1)).unwrap();
        store.rate(ItemId(1), d, now).unwrap();
        let record = *store.record(ItemId(1)).unwrap();
        let later = now + offset;
        prop_assert_eq!(
            ReviewStore::is_eligible(&record, later),
            later >= now + d.interval_ms()
        );
    }

    #[test]
    fn reshuffle_contains_exactly_the_eligible_items(
        n in 0u64..12,
        ratings in prop::collection::vec((difficulty(), 0u64..86_400_000), 0..20),
        query in 0u64..(10 * 86_400_000),
        seed in any::<u64>(),
    ) {
        let mut session = Session::seeded(items(n), seed).unwrap();
        session.reshuffle(0);
        // Each rating hits whatever card is showing, at a random time.
        for (d, at) in ratings {
            session.rate(d, at).unwrap();
        }

        session.reshuffle(query);
        let mut order = session.deck().order().to_vec();
        order.sort();
        let mut expected = session.store().eligible(query);
        expected.sort();
        prop_assert_eq!(order, expected);
        prop_assert_eq!(session.deck().position(), 0);
        prop_assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn navigation_only_lands_on_eligible_cards(
        n in 1u64..8,
        actions in prop::collection::vec(action(), 1..60),
        seed in any::<u64>(),
    ) {
        let mut session = Session::seeded(items(n), seed).unwrap();
        let mut now = 0u64;
        session.reshuffle(now);

        for action in actions {
            let landed = match action {
                Action::Advance => Some(session.advance(now)),
                Action::Retreat => Some(session.retreat(now)),
                Action::Reshuffle => Some(session.reshuffle(now)),
                Action::Rate(d) => session.rate(d, now).unwrap().pop(),
                Action::Wait(ms) => {
                    now += ms;
                    None
                }
            };

            if let Some(Event::CardShown { item_id, .. }) = &landed {
                prop_assert!(session.store().is_item_eligible(*item_id, now));
            }
            if let Some(Event::DeckReshuffled { .. }) = &landed {
                for id in session.deck().order() {
                    prop_assert!(session.store().is_item_eligible(*id, now));
                }
            }

            let pct = session.progress();
            prop_assert!((0.0..=100.0).contains(&pct));
        }
    }

    #[test]
    fn retreat_then_advance_returns_to_an_eligible_card(
        n in 2u64..8,
        steps in 0usize..8,
        seed in any::<u64>(),
    ) {
        let mut session = Session::seeded(items(n), seed).unwrap();
        session.reshuffle(0);
        for _ in 0..steps {
            session.advance(0);
        }
        session.retreat(0);
        session.advance(0);
        let card = session.current().unwrap();
        prop_assert!(card.record.is_eligible(0));
    }
}
