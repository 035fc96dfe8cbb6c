//! Property-based tests for the concurrent map using proptest
//!
//! These tests verify that the map behaves exactly like a sequential
//! model under arbitrary operation sequences and edge-case values.

use crate::map::ConcurrentMap;
use proptest::prelude::*;
use std::collections::HashMap;

/// A single map operation for model-based testing
#[derive(Debug, Clone)]
enum Op {
    Add(String, String),
    Set(String, String),
    Delete(String),
}

fn arb_key() -> impl Strategy<Value = String> {
    // A small key space so that operations collide often
    prop::sample::select(vec![
        String::new(),
        "a".to_string(),
        "b".to_string(),
        "key".to_string(),
        "another key".to_string(),
        "\u{1F980}".to_string(),
    ])
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (arb_key(), any::<String>()).prop_map(|(k, v)| Op::Add(k, v)),
        (arb_key(), any::<String>()).prop_map(|(k, v)| Op::Set(k, v)),
        arb_key().prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn test_matches_sequential_model(ops in prop::collection::vec(arb_op(), 0..100)) {
        let map: ConcurrentMap<String> = ConcurrentMap::new();
        let mut model: HashMap<String, String> = HashMap::new();

        for op in &ops {
            match op {
                Op::Add(k, v) => {
                    map.add(k.clone(), v.clone());
                    model.entry(k.clone()).or_insert_with(|| v.clone());
                }
                Op::Set(k, v) => {
                    map.set(k.clone(), v.clone());
                    model.insert(k.clone(), v.clone());
                }
                Op::Delete(k) => {
                    map.delete(k);
                    model.remove(k);
                }
            }
        }

        // The map agrees with the model on every key the sequence touched.
        for op in &ops {
            let key = match op {
                Op::Add(k, _) | Op::Set(k, _) | Op::Delete(k) => k,
            };
            prop_assert_eq!(map.get(key), model.get(key).cloned());
            prop_assert_eq!(map.has(key), model.contains_key(key));
        }
        prop_assert_eq!(map.len(), model.len());
    }

    #[test]
    fn test_get_after_set(key in any::<String>(), value in any::<String>()) {
        let map = ConcurrentMap::new();
        map.set(key.clone(), value.clone());

        prop_assert_eq!(map.get(&key), Some(value));
        prop_assert!(map.has(&key));
    }

    #[test]
    fn test_add_never_overwrites(
        key in any::<String>(),
        first in any::<String>(),
        second in any::<String>(),
    ) {
        let map = ConcurrentMap::new();
        map.set(key.clone(), first.clone());
        map.add(key.clone(), second);

        // The original value survives, however "empty" it may be.
        prop_assert_eq!(map.get(&key), Some(first));
    }

    #[test]
    fn test_set_always_overwrites(
        key in any::<String>(),
        first in any::<String>(),
        second in any::<String>(),
    ) {
        let map = ConcurrentMap::new();
        map.set(key.clone(), first);
        map.set(key.clone(), second.clone());

        prop_assert_eq!(map.get(&key), Some(second));
    }

    #[test]
    fn test_delete_removes_presence(key in any::<String>(), value in any::<String>()) {
        let map = ConcurrentMap::new();
        map.set(key.clone(), value);
        map.delete(&key);

        prop_assert_eq!(map.get(&key), None);
        prop_assert!(!map.has(&key));
        prop_assert!(map.is_empty());
    }

    #[test]
    fn test_absent_key_reads_empty(key in any::<String>()) {
        let map: ConcurrentMap<String> = ConcurrentMap::new();

        prop_assert_eq!(map.get(&key), None);
        prop_assert!(!map.has(&key));
    }
}
