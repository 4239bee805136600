//! The keyed mapping that every operation in this crate iterates over.
//!
//! This module provides [`Object`], an insertion-ordered mapping from unique
//! keys to values, and the [`object!`](crate::object!) literal macro.
//!
//! # Enumeration Order
//!
//! Entries are enumerated in the order their keys were first inserted.
//! Inserting a key that is already present replaces its value but keeps the
//! key at its original position, the same way assigning to an existing
//! property of a JavaScript object does.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity        |
//! |----------------|-------------------|
//! | `new`          | O(1)              |
//! | `get`          | O(1) average      |
//! | `insert`       | O(1) amortized    |
//! | `remove`       | O(N)              |
//! | `contains_key` | O(1) average      |
//! | `get_index`    | O(1)              |
//! | `len`          | O(1)              |
//! | `iter`         | O(1) + O(N)       |
//!
//! # Examples
//!
//! ```rust
//! use keyed::object::Object;
//!
//! let object = Object::new()
//!     .insert("b".to_string(), 2)
//!     .insert("a".to_string(), 1)
//!     .insert("b".to_string(), 20);
//!
//! let keys: Vec<&String> = object.keys().collect();
//! assert_eq!(keys, vec!["b", "a"]);
//! assert_eq!(object.get("b"), Some(&20));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::Index;

#[cfg(feature = "ahash")]
type IndexHasher = ahash::RandomState;

#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
type IndexHasher = rustc_hash::FxBuildHasher;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type IndexHasher = std::collections::hash_map::RandomState;

// =============================================================================
// Object Definition
// =============================================================================

/// An insertion-ordered mapping from unique keys to values.
///
/// `Object` is the collection the operations in [`crate::iterate`] work on.
/// Those operations only ever borrow an `Object` and build new ones; the
/// consuming [`insert`](Object::insert) and [`remove`](Object::remove)
/// methods exist for constructing objects, so an `Object` that has been
/// handed to an operation is never changed behind the caller's back.
///
/// Equality is order-sensitive: two objects are equal when they hold equal
/// entries in the same enumeration order.
///
/// # Examples
///
/// ```rust
/// use keyed::object;
///
/// let scores = object! { "alice" => 90, "bob" => 72 };
/// assert_eq!(scores.len(), 2);
/// assert_eq!(scores["alice"], 90);
/// assert_eq!(format!("{scores}"), "{alice: 90, bob: 72}");
/// ```
#[derive(Clone)]
pub struct Object<K, V> {
    /// Entries in enumeration order
    entries: Vec<(K, V)>,
    /// Position of each key within `entries`
    positions: HashMap<K, usize, IndexHasher>,
}

static_assertions::assert_impl_all!(Object<String, i32>: Send, Sync, Clone);

impl<K, V> Object<K, V> {
    /// Creates a new empty object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed::object::Object;
    ///
    /// let object: Object<String, i32> = Object::new();
    /// assert!(object.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::with_hasher(IndexHasher::default()),
        }
    }

    /// Creates a new empty object with room for at least `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity_and_hasher(capacity, IndexHasher::default()),
        }
    }

    /// Returns the number of entries in the object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed::object;
    ///
    /// assert_eq!(object! { "a" => 1, "b" => 2 }.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the object contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index` in enumeration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed::object;
    ///
    /// let object = object! { "a" => 1, "b" => 2 };
    /// assert_eq!(object.get_index(1), Some((&"b".to_string(), &2)));
    /// assert_eq!(object.get_index(2), None);
    /// ```
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.entries.get(index).map(|(key, value)| (key, value))
    }

    /// Returns an iterator over the entries in enumeration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed::object;
    ///
    /// let object = object! { "x" => 10, "y" => 20 };
    /// let entries: Vec<(&String, &i32)> = object.iter().collect();
    /// assert_eq!(entries.len(), 2);
    /// assert_eq!(*entries[0].1, 10);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the keys in enumeration order.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the values in enumeration order.
    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.entries.iter(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> Object<K, V> {
    /// Creates an object containing a single entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed::object::Object;
    ///
    /// let object = Object::singleton("answer", 42);
    /// assert_eq!(object.get("answer"), Some(&42));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self {
        Self::with_capacity(1).insert(key, value)
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// The key may be any borrowed form of the object's key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed::object;
    ///
    /// let object = object! { "hello" => 42 };
    /// assert_eq!(object.get("hello"), Some(&42));
    /// assert_eq!(object.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    /// Returns `true` if the object contains `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(key)
    }

    /// Returns the object with `value` stored under `key`.
    ///
    /// A new key is appended to the end of the enumeration order. An existing
    /// key keeps its position and only its value is replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed::object::Object;
    ///
    /// let object = Object::new().insert("a", 1).insert("b", 2).insert("a", 3);
    /// let entries: Vec<(&&str, &i32)> = object.iter().collect();
    /// assert_eq!(entries, vec![(&"a", &3), (&"b", &2)]);
    /// ```
    #[must_use]
    pub fn insert(mut self, key: K, value: V) -> Self {
        self.put(key, value);
        self
    }

    /// Returns the object without the entry stored under `key`.
    ///
    /// The remaining keys keep their relative order. Removing a missing key
    /// returns the object unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed::object;
    ///
    /// let object = object! { "a" => 1, "b" => 2, "c" => 3 }.remove("b");
    /// let keys: Vec<&String> = object.keys().collect();
    /// assert_eq!(keys, vec!["a", "c"]);
    /// ```
    #[must_use]
    pub fn remove<Q>(mut self, key: &Q) -> Self
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(position) = self.positions.remove(key) {
            self.entries.remove(position);
            for (shifted_key, _) in &self.entries[position..] {
                if let Some(shifted_position) = self.positions.get_mut::<K>(shifted_key) {
                    *shifted_position -= 1;
                }
            }
        }
        self
    }

    /// Stores `value` under `key` in place, keeping an existing key's position.
    pub(crate) fn put(&mut self, key: K, value: V) {
        if let Some(&position) = self.positions.get(&key) {
            self.entries[position].1 = value;
        } else {
            self.positions.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
    }

    /// Builds an object from entries whose keys are known to be distinct.
    ///
    /// Used by operations that derive a new object from an existing one, where
    /// the source already guarantees uniqueness.
    pub(crate) fn from_distinct_entries(entries: Vec<(K, V)>) -> Self {
        let mut positions = HashMap::with_capacity_and_hasher(entries.len(), IndexHasher::default());
        for (position, (key, _)) in entries.iter().enumerate() {
            positions.insert(key.clone(), position);
        }
        debug_assert_eq!(positions.len(), entries.len());
        Self { entries, positions }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of an [`Object`].
#[derive(Clone)]
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of an [`Object`].
#[derive(Clone)]
pub struct Keys<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of an [`Object`].
#[derive(Clone)]
pub struct Values<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// An owning iterator over the entries of an [`Object`].
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for Object<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Collects entries into an object. Later duplicates overwrite earlier ones.
impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for Object<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut object = Self::with_capacity(iter.size_hint().0);
        object.extend(iter);
        object
    }
}

impl<K: Eq + Hash + Clone, V> Extend<(K, V)> for Object<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V> IntoIterator for Object<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Object<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Object<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for Object<K, V> {}

impl<K: Hash, V: Hash> Hash for Object<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.len().hash(state);
        for (key, value) in &self.entries {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K, V, Q> Index<&Q> for Object<K, V>
where
    K: Eq + Hash + Clone + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = V;

    /// Returns the value stored under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the object.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in Object"),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Object<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Object<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Literal Macro
// =============================================================================

/// Builds an [`Object`] from `key => value` pairs, in the order written.
///
/// Keys are passed through [`ToOwned::to_owned`], so string literals become
/// `String` keys. A repeated key keeps its first position and its last value.
///
/// # Examples
///
/// ```rust
/// use keyed::object;
/// use keyed::object::Object;
///
/// let object = object! { "a" => 1, "b" => 2, "c" => 3 };
/// assert_eq!(object.get("b"), Some(&2));
///
/// let empty: Object<String, i32> = object! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::object::Object::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let object = $crate::object::Object::new();
        $(
            let object = object.insert(($key).to_owned(), $value);
        )+
        object
    }};
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for Object<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct ObjectVisitor<K, V> {
    key_marker: std::marker::PhantomData<K>,
    value_marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<K, V> ObjectVisitor<K, V> {
    const fn new() -> Self {
        Self {
            key_marker: std::marker::PhantomData,
            value_marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for ObjectVisitor<K, V>
where
    K: serde::Deserialize<'de> + Eq + Hash + Clone,
    V: serde::Deserialize<'de>,
{
    type Value = Object<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut object = Object::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry()? {
            object.put(key, value);
        }
        Ok(object)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Object<K, V>
where
    K: serde::Deserialize<'de> + Eq + Hash + Clone,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(ObjectVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
