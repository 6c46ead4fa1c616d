//! End-to-end scenarios interleaving every container operation through
//! the public API only.

use growvec::{GrowVec, GrowthConfig};

#[test]
fn mixed_operations_track_contents() {
    let mut v = GrowVec::with_capacity(4);
    v.push_all([1, 2, 3]);
    assert!(v.insert(1, 99));
    assert_eq!(v.remove(0), Some(1));
    assert!(v.set(0, 100));
    assert_eq!(v.pop(), Some(3));
    assert_eq!(v.to_vec(), vec![100, 2]);
}

#[test]
fn twenty_pushes_from_default_capacity() {
    let mut v = GrowVec::new();
    for i in 0..20 {
        v.push(i);
    }
    assert_eq!(v.len(), 20);
    // 8 → 16 → 32: two threshold crossings, capacity stays a
    // power-of-two multiple of the default.
    assert_eq!(v.capacity(), 32);
    assert_eq!(v.to_vec(), (0..20).collect::<Vec<_>>());
}

#[test]
fn growth_trajectory_is_exact_per_threshold() {
    let mut v = GrowVec::with_capacity(4);
    let mut observed = vec![v.capacity()];
    for i in 0..33 {
        v.push(i);
        if *observed.last().unwrap() != v.capacity() {
            observed.push(v.capacity());
        }
    }
    assert_eq!(observed, vec![4, 8, 16, 32, 64]);
}

#[test]
fn interleaved_insert_remove_round_trips() {
    let mut v: GrowVec<i32> = (0..8).collect();
    let before = v.to_vec();
    for index in [0, 3, 8] {
        assert!(v.insert(index, -1));
        assert_eq!(v.remove(index), Some(-1));
        assert_eq!(v.to_vec(), before);
    }
}

#[test]
fn rejected_writes_have_no_side_effects() {
    let mut v = GrowVec::with_capacity(2);
    v.push_all([10, 20]);
    let before = v.to_vec();
    let cap = v.capacity();

    assert!(!v.set(2, 0));
    assert!(!v.insert(4, 0));
    assert_eq!(v.remove(2), None);
    assert_eq!(v.get(2), None);

    assert_eq!(v.to_vec(), before);
    assert_eq!(v.capacity(), cap);
}

#[test]
fn string_elements_shift_correctly() {
    let mut v = GrowVec::with_capacity(2);
    v.push_all(["hello".to_string(), "world".to_string()]);
    assert!(v.insert(1, "beautiful".to_string()));
    assert_eq!(v.capacity(), 4);
    assert_eq!(v.to_vec(), vec!["hello", "beautiful", "world"]);
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Record {
    id: u32,
    tag: String,
}

#[test]
fn struct_elements_survive_mixed_ops() {
    let mut v = GrowVec::with_capacity(2);
    v.push(Record {
        id: 1,
        tag: "alpha".into(),
    });
    v.push(Record {
        id: 2,
        tag: "beta".into(),
    });
    assert_eq!(v.get(0).map(|r| r.id), Some(1));

    let removed = v.remove(0).unwrap();
    assert_eq!(removed.tag, "alpha");
    assert_eq!(v.len(), 1);
    assert_eq!(v.get(0).map(|r| r.id), Some(2));
}

#[test]
fn configured_growth_factor_drives_trajectory() {
    let config = GrowthConfig {
        initial_capacity: 2,
        growth_factor: 4,
    };
    let mut v = GrowVec::with_config(config).unwrap();
    v.push_all(0..3);
    assert_eq!(v.capacity(), 8);
    v.push_all(3..9);
    assert_eq!(v.capacity(), 32);
    assert_eq!(v.to_vec(), (0..9).collect::<Vec<_>>());
}

#[test]
fn snapshot_independence_across_later_mutations() {
    let mut v = GrowVec::with_capacity(4);
    v.push_all([1, 2, 3]);
    let snapshot = v.to_vec();

    v.set(0, 99);
    v.push(4);
    v.remove(1);

    assert_eq!(snapshot, vec![1, 2, 3]);
    assert_eq!(v.to_vec(), vec![99, 3, 4]);
}
