//! Container-level properties: hash consistency, idempotence, clone
//! isolation, absent-key signaling.

use cairn_core::key::{digest_key, structural_key, HashKey};
use cairn_core::map::ValueMap;
use cairn_core::set::ValueSet;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct State {
    x: i64,
    y: i64,
    fuel: u64,
}

fn state(x: i64, y: i64, fuel: u64) -> State {
    State { x, y, fuel }
}

#[test]
fn equal_values_always_share_a_key() {
    let samples = [
        state(0, 0, 0),
        state(1, -1, 10),
        state(-40, 3, u64::MAX),
        state(7, 7, 7),
    ];
    for s in samples {
        let twin = s; // Copy: a distinct instance with equal fields.
        assert_eq!(structural_key(&s).unwrap(), structural_key(&twin).unwrap());
        assert_eq!(digest_key(&s).unwrap(), digest_key(&twin).unwrap());
    }
}

#[test]
fn distinct_values_get_distinct_keys() {
    // Representative sample, pairwise distinct, including near-misses like
    // swapped fields.
    let samples = [
        state(0, 0, 0),
        state(0, 0, 1),
        state(0, 1, 0),
        state(1, 0, 0),
        state(2, 3, 4),
        state(3, 2, 4),
        state(-2, -3, 4),
    ];
    for (i, a) in samples.iter().enumerate() {
        for b in &samples[i + 1..] {
            assert_ne!(
                structural_key(a).unwrap(),
                structural_key(b).unwrap(),
                "{a:?} vs {b:?}"
            );
            assert_ne!(
                digest_key(a).unwrap(),
                digest_key(b).unwrap(),
                "{a:?} vs {b:?}"
            );
        }
    }
}

#[test]
fn set_insert_is_idempotent() {
    let mut once = ValueSet::new();
    once.insert(state(5, 5, 5)).unwrap();

    let mut twice = ValueSet::new();
    twice.insert(state(5, 5, 5)).unwrap();
    twice.insert(state(5, 5, 5)).unwrap();

    assert_eq!(once.len(), twice.len());
    let a: Vec<&State> = once.iter().collect();
    let b: Vec<&State> = twice.iter().collect();
    assert_eq!(a, b);
}

#[test]
fn set_clone_isolation() {
    let mut original = ValueSet::new();
    original.insert(state(1, 2, 3)).unwrap();

    let mut branch = original.clone();
    branch.insert(state(9, 9, 9)).unwrap();
    branch.remove(&state(1, 2, 3)).unwrap();

    assert!(original.contains(&state(1, 2, 3)).unwrap());
    assert!(!original.contains(&state(9, 9, 9)).unwrap());
}

#[test]
fn map_clone_isolation() {
    let mut m1 = ValueMap::new();
    m1.insert(state(0, 0, 1), "base").unwrap();

    let mut m2 = m1.clone();
    m2.insert(state(4, 4, 4), "branch").unwrap();

    assert!(!m1.contains(&state(4, 4, 4)).unwrap(), "m1 unchanged");
    assert!(m2.contains(&state(0, 0, 1)).unwrap(), "m2 kept the prefix");
}

#[test]
fn map_absent_key_is_a_signal_not_a_crash() {
    let mut map: ValueMap<State, u64> = ValueMap::new();
    map.insert(state(1, 1, 1), 11).unwrap();

    assert_eq!(map.get(&state(2, 2, 2)).unwrap(), None);
    assert_eq!(*map.get_or(&state(2, 2, 2), &0).unwrap(), 0);
    // Neither lookup materialized the key.
    assert_eq!(map.len(), 1);
}

#[test]
fn custom_keys_and_default_keys_coexist() {
    // Same value type, two key disciplines: structural and packed-int.
    let mut structural = ValueSet::new();
    let mut packed = ValueSet::with_key_fn(|s: &State| HashKey::Int(s.y * 1_000_000 + s.x));

    structural.insert(state(3, 4, 100)).unwrap();
    packed.insert(state(3, 4, 100)).unwrap();

    // Under the packed key, fuel is not part of identity.
    assert!(packed.contains(&state(3, 4, 0)).unwrap());
    assert!(!structural.contains(&state(3, 4, 0)).unwrap());
}
