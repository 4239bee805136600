//! Property-based tests for the object iteration operations.
//!
//! This module verifies that the operations preserve enumeration order,
//! respect the empty-domain laws, and agree between their full and partial
//! forms, using proptest.

use keyed::iterate::{
    every, filter, filter_with, from_array, keys, map, map_to_array, map_with, reduce, some,
    values,
};
use keyed::object::Object;
use proptest::prelude::*;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-z]{1,6}".prop_map(|s| s)
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec((arbitrary_key(), -1000..1000i32), 0..40)
}

fn arbitrary_object() -> impl Strategy<Value = Object<String, i32>> {
    arbitrary_entries().prop_map(|entries| entries.into_iter().collect())
}

// =============================================================================
// Map Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_map_preserves_keys_and_order(object in arbitrary_object(), factor in -5..5i32) {
        let mapped = map(|value, _| value * factor, &object);
        prop_assert_eq!(keys(&mapped), keys(&object));
    }

    #[test]
    fn prop_map_applies_transform_to_each_entry(object in arbitrary_object()) {
        let mapped = map(|value, key| format!("{key}{value}"), &object);
        for (key, value) in &object {
            prop_assert_eq!(mapped.get(key), Some(&format!("{key}{value}")));
        }
    }

    #[test]
    fn prop_map_full_equals_partial(object in arbitrary_object()) {
        let transform = |value: &i32, key: &String| i64::from(*value) + key.len() as i64;
        prop_assert_eq!(map(transform, &object), map_with(transform)(&object));
    }
}

// =============================================================================
// Filter Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_filter_partitions_by_predicate(object in arbitrary_object(), threshold in -1000..1000i32) {
        let predicate = |value: &i32, _: &String| *value >= threshold;
        let filtered = filter(predicate, &object);

        for (key, value) in &object {
            prop_assert_eq!(filtered.contains_key(key), predicate(value, key));
        }
        for (key, value) in &filtered {
            prop_assert_eq!(object.get(key), Some(value));
        }
    }

    #[test]
    fn prop_filter_preserves_relative_order(object in arbitrary_object()) {
        let filtered = filter_with(|value: &i32, _: &String| value % 3 == 0)(&object);
        let expected: Vec<&String> = keys(&object)
            .into_iter()
            .filter(|key| filtered.contains_key(*key))
            .collect();
        prop_assert_eq!(keys(&filtered), expected);
    }
}

// =============================================================================
// Reduce / Quantifier Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_reduce_empty_is_initial(initial in any::<i64>()) {
        let empty: Object<String, i32> = Object::new();
        prop_assert_eq!(reduce(|_, _, _| 0, initial, &empty), initial);
    }

    #[test]
    fn prop_reduce_matches_sequential_fold(object in arbitrary_object()) {
        let folded = reduce(|sum: i64, value, _| sum + i64::from(*value), 0, &object);
        let expected: i64 = values(&object).into_iter().map(|value| i64::from(*value)).sum();
        prop_assert_eq!(folded, expected);
    }

    #[test]
    fn prop_empty_quantifiers(answer in any::<bool>()) {
        let empty: Object<String, i32> = Object::new();
        prop_assert!(!some(|_, _| answer, &empty));
        prop_assert!(every(|_, _| answer, &empty));
    }

    #[test]
    fn prop_some_is_dual_of_every(object in arbitrary_object(), threshold in -1000..1000i32) {
        let below = some(|value, _| *value < threshold, &object);
        let none_below = every(|value, _| *value >= threshold, &object);
        prop_assert_eq!(below, !none_below);
    }
}

// =============================================================================
// Array Conversion Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_map_to_array_is_positional(object in arbitrary_object()) {
        let array = map_to_array(|value, key| (key.clone(), *value), &object);
        prop_assert_eq!(array.len(), object.len());
        for (index, (key, value)) in object.iter().enumerate() {
            prop_assert_eq!(&array[index], &(key.clone(), *value));
        }
    }

    #[test]
    fn prop_from_array_inverts_map_to_array(object in arbitrary_object()) {
        let array = map_to_array(|value, key| (key.clone(), *value), &object);
        let rebuilt = from_array(|(key, _)| key.clone(), |(_, value)| *value, &array);
        prop_assert_eq!(rebuilt, object);
    }

    #[test]
    fn prop_from_array_last_write_wins(entries in arbitrary_entries()) {
        let built = from_array(|(key, _)| key.clone(), |(_, value)| *value, &entries);
        for (key, value) in &built {
            let last = entries.iter().rev().find(|(candidate, _)| candidate == key).map(|(_, value)| value);
            prop_assert_eq!(Some(value), last);
        }
    }
}
