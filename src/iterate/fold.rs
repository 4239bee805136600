//! Operations that collapse an object's entries into a single value.

use crate::object::Object;

/// Folds the entries of `object` into an accumulator, in enumeration order.
///
/// Starts from `initial` and replaces the accumulator with
/// `reducer(accumulator, value, key)` at each entry. The accumulator is moved
/// through every step, so no step can observe another step's value through an
/// alias. An empty object returns `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use keyed::iterate::reduce;
/// use keyed::object;
///
/// let object = object! { "a" => 1, "b" => 2, "c" => 3 };
/// let pairs = reduce(
///     |mut pairs: Vec<(String, i32)>, value, key| {
///         pairs.push((key.clone(), *value));
///         pairs
///     },
///     Vec::new(),
///     &object,
/// );
/// assert_eq!(pairs[2], ("c".to_string(), 3));
/// ```
pub fn reduce<'a, K, V, A, F>(mut reducer: F, initial: A, object: &'a Object<K, V>) -> A
where
    F: FnMut(A, &'a V, &'a K) -> A,
{
    object
        .iter()
        .fold(initial, |accumulator, (key, value)| {
            reducer(accumulator, value, key)
        })
}

/// Returns [`reduce`] with `reducer` and `initial` bound, awaiting the object.
///
/// `initial` is cloned for every call, so each run starts from a fresh
/// accumulator.
///
/// # Examples
///
/// ```rust
/// use keyed::iterate::reduce_with;
/// use keyed::object;
///
/// let total = reduce_with(|sum: i32, value: &i32, _key: &String| sum + value, 0);
/// assert_eq!(total(&object! { "a" => 1, "b" => 2 }), 3);
/// assert_eq!(total(&object! { "c" => 10 }), 10);
/// ```
pub fn reduce_with<K, V, A, F>(reducer: F, initial: A) -> impl Fn(&Object<K, V>) -> A
where
    A: Clone,
    F: Fn(A, &V, &K) -> A,
{
    move |object| reduce(&reducer, initial.clone(), object)
}

/// Returns `true` if `predicate(value, key)` holds for at least one entry.
///
/// Stops at the first match. An empty object yields `false`.
///
/// # Examples
///
/// ```rust
/// use keyed::iterate::some;
/// use keyed::object;
///
/// let object = object! { "a" => 1, "b" => 2, "c" => 3 };
/// assert!(some(|value, key| *value == 2 && key == "b", &object));
/// assert!(!some(|value, key| *value == 1 && key == "b", &object));
/// ```
pub fn some<'a, K, V, F>(mut predicate: F, object: &'a Object<K, V>) -> bool
where
    F: FnMut(&'a V, &'a K) -> bool,
{
    object.iter().any(|(key, value)| predicate(value, key))
}

/// Returns [`some`] with `predicate` bound, awaiting the object.
pub fn some_with<K, V, F>(predicate: F) -> impl Fn(&Object<K, V>) -> bool
where
    F: Fn(&V, &K) -> bool,
{
    move |object| some(&predicate, object)
}

/// Returns `true` if `predicate(value, key)` holds for every entry.
///
/// Stops at the first failure. An empty object yields `true`.
///
/// # Examples
///
/// ```rust
/// use keyed::iterate::every;
/// use keyed::object;
///
/// let object = object! { "a" => 1, "b" => 2, "c" => 3 };
/// assert!(every(|value, _| *value > 0, &object));
/// assert!(!every(|value, _| *value > 1, &object));
/// ```
pub fn every<'a, K, V, F>(mut predicate: F, object: &'a Object<K, V>) -> bool
where
    F: FnMut(&'a V, &'a K) -> bool,
{
    object.iter().all(|(key, value)| predicate(value, key))
}

/// Returns [`every`] with `predicate` bound, awaiting the object.
pub fn every_with<K, V, F>(predicate: F) -> impl Fn(&Object<K, V>) -> bool
where
    F: Fn(&V, &K) -> bool,
{
    move |object| every(&predicate, object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Object<&'static str, i32> {
        Object::new().insert("a", 1).insert("b", 2).insert("c", 3)
    }

    #[rstest]
    fn test_reduce_on_empty_returns_initial() {
        let empty: Object<&str, i32> = Object::new();
        let result = reduce(|_, _, _| "changed", "initial", &empty);
        assert_eq!(result, "initial");
    }

    #[rstest]
    fn test_reduce_can_collect_borrowed_keys() {
        let object = sample();
        let keys = reduce(
            |mut keys: Vec<&&str>, _, key| {
                keys.push(key);
                keys
            },
            Vec::new(),
            &object,
        );
        assert_eq!(keys, vec![&"a", &"b", &"c"]);
    }

    #[rstest]
    fn test_reduce_with_does_not_share_accumulator() {
        let collect = reduce_with(
            |mut values: Vec<i32>, value: &i32, _: &&str| {
                values.push(*value);
                values
            },
            Vec::new(),
        );
        assert_eq!(collect(&sample()), vec![1, 2, 3]);
        assert_eq!(collect(&sample()), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_some_short_circuits() {
        let mut visited = 0;
        let found = some(
            |value, _| {
                visited += 1;
                *value == 1
            },
            &sample(),
        );
        assert!(found);
        assert_eq!(visited, 1);
    }

    #[rstest]
    fn test_every_short_circuits() {
        let mut visited = 0;
        let all = every(
            |value, _| {
                visited += 1;
                *value < 2
            },
            &sample(),
        );
        assert!(!all);
        assert_eq!(visited, 2);
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn test_quantifiers_on_empty_object(#[case] answer: bool) {
        let empty: Object<&str, i32> = Object::new();
        assert!(!some_with(move |_: &i32, _: &&str| answer)(&empty));
        assert!(every_with(move |_: &i32, _: &&str| answer)(&empty));
    }
}
