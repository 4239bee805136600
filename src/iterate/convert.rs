//! Conversions between objects and sequences.

use std::hash::Hash;

use super::map_to_array;
use crate::compose::identity;
use crate::object::Object;

/// Builds an object from `elements`, taking each entry's key from
/// `key_of(element)` and its value from `value_of(element)`.
///
/// When two elements produce the same key, the later element's value wins.
/// The key stays at the position where it first appeared.
///
/// # Examples
///
/// ```rust
/// use keyed::iterate::from_array;
/// use keyed::object;
///
/// struct Entry { value: i32, key: &'static str }
///
/// let elements = [
///     Entry { value: 1, key: "a" },
///     Entry { value: 2, key: "b" },
///     Entry { value: 3, key: "a" },
/// ];
/// let object = from_array(|entry| entry.key.to_string(), |entry| entry.value, &elements);
/// assert_eq!(object, object! { "a" => 3, "b" => 2 });
/// ```
pub fn from_array<'a, T, K, V, KF, VF>(
    mut key_of: KF,
    mut value_of: VF,
    elements: &'a [T],
) -> Object<K, V>
where
    K: Eq + Hash + Clone,
    KF: FnMut(&'a T) -> K,
    VF: FnMut(&'a T) -> V,
{
    elements
        .iter()
        .map(|element| (key_of(element), value_of(element)))
        .collect()
}

/// Returns [`from_array`] with both extractors bound, awaiting the elements.
pub fn from_array_with<T, K, V, KF, VF>(key_of: KF, value_of: VF) -> impl Fn(&[T]) -> Object<K, V>
where
    K: Eq + Hash + Clone,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
{
    move |elements| from_array(&key_of, &value_of, elements)
}

/// Returns the keys of `object` in enumeration order.
///
/// # Examples
///
/// ```rust
/// use keyed::iterate::keys;
/// use keyed::object;
///
/// assert_eq!(keys(&object! { "a" => 1, "b" => 2, "c" => 3 }), vec!["a", "b", "c"]);
/// ```
pub fn keys<K, V>(object: &Object<K, V>) -> Vec<&K> {
    object.keys().collect()
}

/// Returns the values of `object` in enumeration order.
///
/// # Examples
///
/// ```rust
/// use keyed::iterate::values;
/// use keyed::object;
///
/// assert_eq!(values(&object! { "a" => 1, "b" => 2, "c" => 3 }), vec![&1, &2, &3]);
/// ```
pub fn values<K, V>(object: &Object<K, V>) -> Vec<&V> {
    map_to_array(|value, _key| identity(value), object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Pair {
        value: i32,
        key: String,
    }

    fn pair(value: i32, key: &str) -> Pair {
        Pair {
            value,
            key: key.to_string(),
        }
    }

    #[rstest]
    fn test_from_array_builds_in_sequence_order() {
        let elements = vec![pair(1, "a"), pair(2, "b"), pair(3, "c")];
        let object = from_array(|element| element.key.clone(), |element| element.value, &elements);
        assert_eq!(keys(&object), vec!["a", "b", "c"]);
        assert_eq!(values(&object), vec![&1, &2, &3]);
    }

    #[rstest]
    fn test_from_array_last_write_wins() {
        let elements = vec![pair(1, "x"), pair(2, "y"), pair(3, "x"), pair(4, "x")];
        let object = from_array(|element| element.key.clone(), |element| element.value, &elements);
        assert_eq!(object.len(), 2);
        assert_eq!(object.get("x"), Some(&4));
        assert_eq!(keys(&object), vec!["x", "y"]);
    }

    #[rstest]
    fn test_from_array_value_can_borrow_element() {
        let elements = vec![pair(1, "a")];
        let object = from_array(|element| element.value, |element| &element.key, &elements);
        assert_eq!(object.get(&1), Some(&&"a".to_string()));
    }

    #[rstest]
    fn test_from_array_with_is_reusable() {
        let index = from_array_with(
            |element: &Pair| element.key.clone(),
            |element: &Pair| element.clone(),
        );
        let first = index(&[pair(1, "a")]);
        let second = index(&[pair(2, "b"), pair(3, "c")]);
        assert_eq!(first.get("a"), Some(&pair(1, "a")));
        assert_eq!(second.len(), 2);
    }

    #[rstest]
    fn test_keys_and_values_of_empty_object() {
        let empty: Object<String, i32> = Object::new();
        assert!(keys(&empty).is_empty());
        assert!(values(&empty).is_empty());
    }
}
