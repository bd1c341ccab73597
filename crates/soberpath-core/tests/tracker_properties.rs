//! Property tests for item stores and the progress aggregator.

use proptest::prelude::*;
use soberpath_core::progress::{percentage, summarize};
use soberpath_core::{Habit, InsertPosition, ItemDraft, ItemId, ItemStore};

fn store_from(flags: &[bool]) -> ItemStore<Habit> {
    let items = flags
        .iter()
        .enumerate()
        .map(|(i, &done)| Habit::seeded(i.to_string(), format!("habit {i}")).completed(done))
        .collect();
    ItemStore::from_items(items, InsertPosition::Front).unwrap()
}

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(usize),
    Remove(usize),
    ToggleMissing,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z]{1,12}".prop_map(Op::Add),
        (0usize..16).prop_map(Op::Toggle),
        (0usize..16).prop_map(Op::Remove),
        Just(Op::ToggleMissing),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn toggle_twice_restores_completion(flags in prop::collection::vec(any::<bool>(), 1..20), pick in any::<prop::sample::Index>()) {
        let mut store = store_from(&flags);
        let index = pick.index(flags.len());
        let id = ItemId::new(index.to_string());

        store.toggle(&id);
        store.toggle(&id);

        prop_assert_eq!(store.get(&id).unwrap().completed, flags[index]);
        prop_assert_eq!(store.progress(), summarize(&store_from(&flags).snapshot()));
    }

    #[test]
    fn counts_stay_consistent_under_any_ops(flags in prop::collection::vec(any::<bool>(), 0..16), ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut store = store_from(&flags);

        for op in ops {
            match op {
                Op::Add(title) => {
                    let before = store.len();
                    let added = store.add(&title, ItemDraft::default()).unwrap();
                    prop_assert_eq!(store.len(), before + 1);
                    prop_assert!(!added.completed);
                    prop_assert_eq!(&store.items()[0].id, &added.id);
                }
                Op::Toggle(i) => {
                    let id = ItemId::new(i.to_string());
                    let before = store.get(&id).map(|item| item.completed);
                    let event = store.toggle(&id);
                    prop_assert_eq!(event.is_some(), before.is_some());
                    prop_assert_eq!(store.get(&id).map(|item| item.completed), before.map(|done| !done));
                }
                Op::Remove(i) => {
                    let id = ItemId::new(i.to_string());
                    let before = store.len();
                    let present = store.contains(&id);
                    store.remove(&id);
                    prop_assert_eq!(store.len(), if present { before - 1 } else { before });
                    prop_assert!(!store.contains(&id));
                }
                Op::ToggleMissing => {
                    let before = store.snapshot();
                    prop_assert!(store.toggle(&ItemId::new("missing")).is_none());
                    let after = store.snapshot();
                    prop_assert_eq!(after, before);
                }
            }

            let progress = store.progress();
            prop_assert_eq!(progress.total_count, store.len());
            prop_assert_eq!(progress.completed_count, store.completed().count());
            prop_assert!(progress.completed_count <= progress.total_count);
            prop_assert!(progress.percentage <= 100);
            if store.is_empty() {
                prop_assert_eq!(progress.percentage, 0);
            }
        }
    }

    #[test]
    fn percentage_is_bounded_and_monotonic(total in 0usize..500, completed in 0usize..500) {
        let completed = completed.min(total);
        let value = percentage(completed, total);
        prop_assert!(value <= 100);
        if total == 0 {
            prop_assert_eq!(value, 0);
        }
        if completed == total && total > 0 {
            prop_assert_eq!(value, 100);
        }
        if completed < total {
            prop_assert!(value <= percentage(completed + 1, total));
        }
    }

    #[test]
    fn snapshots_survive_later_mutation(flags in prop::collection::vec(any::<bool>(), 1..12)) {
        let mut store = store_from(&flags);
        let before = store.snapshot();
        let first = before[0].id.clone();

        store.toggle(&first);
        store.add("extra", ItemDraft::default()).unwrap();
        store.remove(&first);

        prop_assert_eq!(before.len(), flags.len());
        prop_assert_eq!(before[0].completed, flags[0]);
    }
}
