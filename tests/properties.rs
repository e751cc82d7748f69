use std::collections::BTreeSet;

use proptest::prelude::*;
use skipset::SkipListSet;

proptest! {
    /// Any interleaving of inserts and removes agrees with a sorted-set
    /// model, element for element.
    #[test]
    fn matches_btree_set(ops in prop::collection::vec((any::<bool>(), 0i64..64), 0..200)) {
        let mut set = SkipListSet::new();
        let mut model = BTreeSet::new();

        for (insert, value) in ops {
            if insert {
                prop_assert_eq!(set.insert(value).unwrap(), model.insert(value));
            } else {
                prop_assert_eq!(set.remove(&value).unwrap(), model.remove(&value));
            }
            prop_assert_eq!(set.len(), model.len());
        }

        let values: Vec<i64> = set.iter().copied().collect();
        let expected: Vec<i64> = model.iter().copied().collect();
        prop_assert_eq!(values, expected);
    }

    /// Iteration order is always ascending, whatever was inserted.
    #[test]
    fn iteration_is_ascending(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut set = SkipListSet::new();
        for value in values {
            set.insert(value).unwrap();
        }

        let observed: Vec<i32> = set.iter().copied().collect();
        for pair in observed.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    /// Membership reflects exactly the values inserted and not removed.
    #[test]
    fn membership(present in prop::collection::btree_set(0i64..128, 0..40),
                  removed in prop::collection::btree_set(0i64..128, 0..40)) {
        let mut set = SkipListSet::new();
        for &value in present.iter().chain(removed.iter()) {
            set.insert(value).unwrap();
        }
        for value in &removed {
            set.remove(value).unwrap();
        }

        for value in 0..128 {
            let expected = present.contains(&value) && !removed.contains(&value);
            prop_assert_eq!(set.contains(&value).unwrap(), expected);
        }
    }

    /// Bulk insert followed by bulk removal of the same values restores
    /// emptiness.
    #[test]
    fn bulk_round_trip(values in prop::collection::btree_set(any::<i64>(), 0..64)) {
        let values: Vec<i64> = values.into_iter().collect();
        let mut set = SkipListSet::new();

        prop_assert_eq!(set.insert_all(values.clone()).unwrap(), !values.is_empty());
        prop_assert_eq!(set.len(), values.len());
        prop_assert_eq!(set.remove_all(&values).unwrap(), !values.is_empty());
        prop_assert!(set.is_empty());
    }

    /// A rebuild never changes the observable contents.
    #[test]
    fn rebalance_is_idempotent(values in prop::collection::vec(any::<i16>(), 0..200),
                               seed in any::<u64>()) {
        let mut set = SkipListSet::with_seed(seed);
        for value in values {
            set.insert(value).unwrap();
        }

        let before = set.to_vec();
        set.rebalance().unwrap();
        prop_assert_eq!(set.to_vec(), before);
    }
}
