use skipset::{OperationError, SkipListSet};

#[test]
fn insert() {
    let mut set = SkipListSet::new();

    assert_eq!(set.insert(1).unwrap(), true);
    assert_eq!(set.insert(1).unwrap(), false);
    assert_eq!(set.len(), 1);
}

#[test]
fn insert_out_of_order() {
    let mut set = SkipListSet::new();
    for v in [5, 1, 9, 1, 3] {
        set.insert(v).unwrap();
    }

    assert_eq!(set.len(), 4);
    assert_eq!(set.to_vec(), vec![1, 3, 5, 9]);
}

#[test]
fn remove() {
    let mut set = SkipListSet::new();

    assert_eq!(set.remove(&10).unwrap(), false);
    assert_eq!(set.insert(10).unwrap(), true);
    assert_eq!(set.remove(&10).unwrap(), true);
    assert_eq!(set.len(), 0);
    assert_eq!(set.contains(&10).unwrap(), false);
}

#[test]
fn first_and_last_on_empty_set() {
    let set: SkipListSet<i64> = SkipListSet::new();

    assert_eq!(set.first(), Err(OperationError::EmptyError));
    assert_eq!(set.last(), Err(OperationError::EmptyError));
}

#[test]
fn first_and_last() {
    let mut set = SkipListSet::new();
    set.insert_all(vec![7, 3, 11]).unwrap();

    assert_eq!(set.first(), Ok(&3));
    assert_eq!(set.last(), Ok(&11));
}

#[test]
fn insert_all() {
    let mut set = SkipListSet::new();

    assert_eq!(set.insert_all(vec![4, 2, 8]).unwrap(), true);
    assert_eq!(set.insert_all(vec![4, 2, 8]).unwrap(), false);
    assert_eq!(set.len(), 3);
    assert_eq!(set.to_vec(), vec![2, 4, 8]);
}

#[test]
fn remove_all_restores_emptiness() {
    let mut set = SkipListSet::new();
    let values = vec![6, 1, 9, 4];

    assert_eq!(set.insert_all(values.clone()).unwrap(), true);
    assert_eq!(set.remove_all(&values).unwrap(), true);
    assert!(set.is_empty());
    assert_eq!(set.remove_all(&values).unwrap(), false);
}

#[test]
fn contains_all() {
    let mut set = SkipListSet::new();
    set.insert_all(vec![1, 2, 3, 4]).unwrap();

    assert_eq!(set.contains_all(&[2, 4]).unwrap(), true);
    assert_eq!(set.contains_all(&[2, 5]).unwrap(), false);
    assert_eq!(set.contains_all(&[]).unwrap(), true);
}

#[test]
fn iteration_is_sorted() {
    let mut set = SkipListSet::with_seed(4);
    set.insert_all(vec![20, 5, 15, 0, 10]).unwrap();

    let values: Vec<i64> = set.iter().copied().collect();
    assert_eq!(values, vec![0, 5, 10, 15, 20]);

    let owned: Vec<i64> = set.into_iter().collect();
    assert_eq!(owned, vec![0, 5, 10, 15, 20]);
}

#[test]
fn unsupported_operations_always_fail() {
    let mut set = SkipListSet::new();
    set.insert_all(vec![1, 2, 3]).unwrap();

    for _ in 0..3 {
        assert_eq!(
            set.sub_set(&1, &3).err(),
            Some(OperationError::NotSupportedError("sub_set"))
        );
        assert_eq!(
            set.head_set(&2).err(),
            Some(OperationError::NotSupportedError("head_set"))
        );
        assert_eq!(
            set.tail_set(&2).err(),
            Some(OperationError::NotSupportedError("tail_set"))
        );
        assert_eq!(
            set.retain_all(&[1]).err(),
            Some(OperationError::NotSupportedError("retain_all"))
        );
    }
    assert_eq!(set.to_vec(), vec![1, 2, 3]);
}

#[test]
fn incomparable_values_error_without_corruption() {
    let mut set = SkipListSet::new();
    set.insert(1.5f64).unwrap();
    set.insert(0.5f64).unwrap();

    assert_eq!(set.insert(f64::NAN), Err(OperationError::InvalidElementError));
    assert_eq!(set.len(), 2);
    assert_eq!(set.to_vec(), vec![0.5, 1.5]);
}

#[test]
fn rebalance_keeps_contents() {
    let mut set = SkipListSet::with_seed(8);
    set.insert_all(0..200).unwrap();
    let before = set.to_vec();

    set.rebalance().unwrap();
    assert_eq!(set.to_vec(), before);
    assert_eq!(set.len(), 200);
}

#[test]
fn set_equality() {
    let mut a = SkipListSet::with_seed(1);
    let mut b = SkipListSet::with_seed(2);
    a.insert_all(vec![1, 2, 3]).unwrap();
    b.insert_all(vec![3, 2, 1]).unwrap();

    // Same membership, independently built structures.
    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());

    b.remove(&2).unwrap();
    assert_ne!(a, b);
}

#[test]
fn seeded_sets_are_deterministic() {
    let build = || {
        let mut set = SkipListSet::with_seed(1234);
        set.insert_all(vec![9, 4, 7, 1, 8, 3]).unwrap();
        set
    };

    assert_eq!(build().to_vec(), build().to_vec());
}
