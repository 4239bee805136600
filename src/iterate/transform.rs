//! Operations that build a new collection from an object's entries.

use std::hash::Hash;

use crate::object::Object;

/// Returns a new object with every value replaced by `transform(value, key)`.
///
/// The result has the same keys as `object`, in the same order.
///
/// # Examples
///
/// ```rust
/// use keyed::iterate::map;
/// use keyed::object;
///
/// let object = object! { "a" => 1, "b" => 2, "c" => 3 };
/// let mapped = map(|value, key| if key == "b" { value * 3 } else { value * 2 }, &object);
/// assert_eq!(mapped, object! { "a" => 2, "b" => 6, "c" => 6 });
/// ```
pub fn map<'a, K, V, R, F>(mut transform: F, object: &'a Object<K, V>) -> Object<K, R>
where
    K: Eq + Hash + Clone,
    F: FnMut(&'a V, &'a K) -> R,
{
    let entries = object
        .iter()
        .map(|(key, value)| (key.clone(), transform(value, key)))
        .collect();
    Object::from_distinct_entries(entries)
}

/// Returns [`map`] with `transform` bound, awaiting the object.
///
/// # Examples
///
/// ```rust
/// use keyed::iterate::map_with;
/// use keyed::object;
///
/// let double = map_with(|value: &i32, _key: &String| value * 2);
/// assert_eq!(double(&object! { "a" => 1 }), object! { "a" => 2 });
/// assert_eq!(double(&object! { "b" => 5 }), object! { "b" => 10 });
/// ```
pub fn map_with<K, V, R, F>(transform: F) -> impl Fn(&Object<K, V>) -> Object<K, R>
where
    K: Eq + Hash + Clone,
    F: Fn(&V, &K) -> R,
{
    move |object| map(&transform, object)
}

/// Returns a new object holding only the entries for which
/// `predicate(value, key)` is `true`.
///
/// Rejected keys are absent from the result. Retained keys keep their
/// relative order.
///
/// # Examples
///
/// ```rust
/// use keyed::iterate::filter;
/// use keyed::object;
///
/// let object = object! { "a" => 1, "b" => 2, "c" => 3 };
/// let filtered = filter(|value, key| *value > 1 && key.as_str() > "b", &object);
/// assert_eq!(filtered, object! { "c" => 3 });
/// ```
pub fn filter<'a, K, V, F>(mut predicate: F, object: &'a Object<K, V>) -> Object<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: FnMut(&'a V, &'a K) -> bool,
{
    let entries = object
        .iter()
        .filter(|&(key, value)| predicate(value, key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    Object::from_distinct_entries(entries)
}

/// Returns [`filter`] with `predicate` bound, awaiting the object.
pub fn filter_with<K, V, F>(predicate: F) -> impl Fn(&Object<K, V>) -> Object<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&V, &K) -> bool,
{
    move |object| filter(&predicate, object)
}

/// Returns `transform(value, key)` for every entry, in enumeration order.
///
/// The result has exactly one element per entry.
///
/// # Examples
///
/// ```rust
/// use keyed::iterate::map_to_array;
/// use keyed::object;
///
/// let object = object! { "a" => 1, "b" => 2 };
/// let pairs = map_to_array(|value, key| format!("{key}={value}"), &object);
/// assert_eq!(pairs, vec!["a=1", "b=2"]);
/// ```
pub fn map_to_array<'a, K, V, R, F>(mut transform: F, object: &'a Object<K, V>) -> Vec<R>
where
    F: FnMut(&'a V, &'a K) -> R,
{
    object
        .iter()
        .map(|(key, value)| transform(value, key))
        .collect()
}

/// Returns [`map_to_array`] with `transform` bound, awaiting the object.
pub fn map_to_array_with<K, V, R, F>(transform: F) -> impl Fn(&Object<K, V>) -> Vec<R>
where
    F: Fn(&V, &K) -> R,
{
    move |object| map_to_array(&transform, object)
}
