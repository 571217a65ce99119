//! Insertion-ordered hash map.
//!
//! This module provides [`OrderedHash`], the mapping source of the crate.
//! Entries are enumerated in the order their keys were first inserted, which
//! is the order every combinator observes.
//!
//! # Overview
//!
//! - O(1) average get / `contains_key` through an `FxHashMap` index
//! - O(1) amortized insert; replacing a value keeps the entry's position
//! - O(n) remove, shifting later entries forward
//!
//! # Examples
//!
//! ```rust
//! use enumerables::{OrderedHash, ordered_hash};
//!
//! let mut codes = ordered_hash! {
//!     "kenya" => 254,
//!     "uganda" => 256,
//! };
//! codes.insert("eritrea", 291);
//! codes.insert("kenya", 255);
//!
//! let keys: Vec<&&str> = codes.keys().collect();
//! assert_eq!(keys, vec![&"kenya", &"uganda", &"eritrea"]);
//! assert_eq!(codes.get("kenya"), Some(&255));
//! ```

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::Enumerable;
use crate::element::{Element, TypeTag, describe};

/// An insertion-ordered map from keys to values.
///
/// Equality ignores order: two hashes are equal when they hold the same
/// key/value pairs.
///
/// # Examples
///
/// ```rust
/// use enumerables::OrderedHash;
///
/// let mut hash = OrderedHash::new();
/// assert_eq!(hash.insert("b", 2), None);
/// assert_eq!(hash.insert("a", 1), None);
/// assert_eq!(hash.insert("b", 20), Some(2));
///
/// let entries: Vec<_> = hash.iter().cloned().collect();
/// assert_eq!(entries, vec![("b", 20), ("a", 1)]);
/// ```
#[derive(Clone)]
pub struct OrderedHash<K, V> {
    entries: Vec<(K, V)>,
    index: FxHashMap<K, usize>,
}

impl<K, V> OrderedHash<K, V> {
    /// Creates a new empty hash.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Creates an empty hash with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the hash holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `position` in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::ordered_hash;
    ///
    /// let hash = ordered_hash! { "x" => 1, "y" => 2 };
    /// assert_eq!(hash.get_index(1), Some((&"y", &2)));
    /// assert_eq!(hash.get_index(2), None);
    /// ```
    #[must_use]
    pub fn get_index(&self, position: usize) -> Option<(&K, &V)> {
        self.entries.get(position).map(|(key, value)| (key, value))
    }

    /// Returns an iterator over the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, (K, V)> {
        self.entries.iter()
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<K: Hash + Eq, V> OrderedHash<K, V> {
    /// Returns a reference to the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .and_then(|&position| self.entries.get(position))
            .map(|(_, value)| value)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Removes `key`, returning its value.
    ///
    /// Entries inserted after the removed one move forward by one position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::ordered_hash;
    ///
    /// let mut hash = ordered_hash! { "a" => 1, "b" => 2, "c" => 3 };
    /// assert_eq!(hash.remove("a"), Some(1));
    /// assert_eq!(hash.get_index(0), Some((&"b", &2)));
    /// assert_eq!(hash.get("c"), Some(&3));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.index.remove(key)?;
        let (_, value) = self.entries.remove(position);
        for (shifted, _) in &self.entries[position..] {
            if let Some(slot) = self.index.get_mut::<K>(shifted) {
                *slot -= 1;
            }
        }
        Some(value)
    }
}

impl<K: Hash + Eq + Clone, V> OrderedHash<K, V> {
    /// Inserts a key/value pair.
    ///
    /// A new key is appended at the end. An existing key keeps its position,
    /// its value is replaced and the previous value returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&position) = self.index.get(&key) {
            return self
                .entries
                .get_mut(position)
                .map(|(_, slot)| std::mem::replace(slot, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }
}

/// Builds an [`OrderedHash`] from `key => value` pairs.
///
/// # Examples
///
/// ```rust
/// use enumerables::ordered_hash;
///
/// let hash = ordered_hash! {
///     "kenya" => 254,
///     "uganda" => 256,
/// };
/// assert_eq!(hash.len(), 2);
/// ```
#[macro_export]
macro_rules! ordered_hash {
    () => {
        $crate::OrderedHash::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut hash = $crate::OrderedHash::new();
        $(
            hash.insert($key, $value);
        )+
        hash
    }};
}

// =============================================================================
// Enumerable / Element Implementations
// =============================================================================

impl<K: Hash + Eq + Clone, V> Enumerable for OrderedHash<K, V> {
    type Item = (K, V);
    type Yield<'a>
        = &'a (K, V)
    where
        Self: 'a;
    type Cursor<'a>
        = std::slice::Iter<'a, (K, V)>
    where
        Self: 'a;
    type Selection = Self;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.entries.iter()
    }
}

impl<K: Element, V: Element> Element for OrderedHash<K, V> {
    fn text(&self) -> Option<Cow<'_, str>> {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(key, value)| format!("{} => {}", describe(key), describe(value)))
            .collect();
        Some(Cow::Owned(format!("{{{}}}", parts.join(", "))))
    }

    fn is_a(&self, tag: TypeTag) -> bool {
        matches!(tag, TypeTag::Object | TypeTag::Mapping)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for OrderedHash<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone, V> FromIterator<(K, V)> for OrderedHash<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut hash = Self::new();
        hash.extend(iter);
        hash
    }
}

impl<K: Hash + Eq + Clone, V> Extend<(K, V)> for OrderedHash<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// An owning iterator over the entries of an [`OrderedHash`].
pub struct OrderedHashIntoIterator<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for OrderedHashIntoIterator<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for OrderedHashIntoIterator<K, V> {}

impl<K, V> IntoIterator for OrderedHash<K, V> {
    type Item = (K, V);
    type IntoIter = OrderedHashIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedHashIntoIterator {
            entries: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedHash<K, V> {
    type Item = &'a (K, V);
    type IntoIter = std::slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for OrderedHash<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Hash + Eq, V: Eq> Eq for OrderedHash<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedHash<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.entries.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for OrderedHash<K, V>
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
struct OrderedHashVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for OrderedHashVisitor<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq + Clone,
    V: serde::Deserialize<'de>,
{
    type Value = OrderedHash<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut hash = OrderedHash::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry()? {
            hash.insert(key, value);
        }
        Ok(hash)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for OrderedHash<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq + Clone,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedHashVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn country_codes() -> OrderedHash<String, i32> {
        crate::ordered_hash! {
            "kenya".to_string() => 254,
            "uganda".to_string() => 256,
            "eritrea".to_string() => 291,
        }
    }

    #[rstest]
    fn test_new_is_empty() {
        let hash: OrderedHash<i32, i32> = OrderedHash::new();
        assert!(hash.is_empty());
        assert_eq!(hash.len(), 0);
        assert_eq!(hash.get(&1), None);
    }

    #[rstest]
    fn test_iteration_follows_insertion_order() {
        let hash = country_codes();
        let keys: Vec<&str> = hash.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["kenya", "uganda", "eritrea"]);
        let values: Vec<i32> = hash.values().copied().collect();
        assert_eq!(values, vec![254, 256, 291]);
    }

    #[rstest]
    fn test_insert_existing_key_keeps_position() {
        let mut hash = country_codes();
        assert_eq!(hash.insert("kenya".to_string(), 1), Some(254));
        assert_eq!(hash.get_index(0), Some((&"kenya".to_string(), &1)));
        assert_eq!(hash.len(), 3);
    }

    #[rstest]
    fn test_get_by_borrowed_key() {
        let hash = country_codes();
        assert_eq!(hash.get("uganda"), Some(&256));
        assert!(hash.contains_key("eritrea"));
        assert!(!hash.contains_key("tanzania"));
    }

    #[rstest]
    fn test_remove_shifts_later_entries() {
        let mut hash = country_codes();
        assert_eq!(hash.remove("kenya"), Some(254));
        assert_eq!(hash.remove("kenya"), None);
        assert_eq!(hash.len(), 2);
        assert_eq!(hash.get("uganda"), Some(&256));
        assert_eq!(hash.get("eritrea"), Some(&291));
        assert_eq!(hash.get_index(0).map(|(key, _)| key.as_str()), Some("uganda"));

        hash.insert("kenya".to_string(), 254);
        assert_eq!(hash.get_index(2).map(|(key, _)| key.as_str()), Some("kenya"));
        assert_eq!(hash.get("kenya"), Some(&254));
    }

    #[rstest]
    fn test_remove_from_middle_reindexes_tail() {
        let mut hash = country_codes();
        assert_eq!(hash.remove("uganda"), Some(256));
        assert_eq!(hash.get_index(1).map(|(key, _)| key.as_str()), Some("eritrea"));
        assert_eq!(hash.get("eritrea"), Some(&291));
        assert!(!hash.contains_key("uganda"));

        assert_eq!(hash.insert("eritrea".to_string(), 292), Some(291));
        assert_eq!(hash.get_index(1), Some((&"eritrea".to_string(), &292)));
        assert_eq!(hash.len(), 2);
    }

    #[rstest]
    fn test_equality_ignores_order() {
        let forward: OrderedHash<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let backward: OrderedHash<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
        let different: OrderedHash<&str, i32> = [("a", 1), ("b", 3)].into_iter().collect();
        assert_eq!(forward, backward);
        assert_ne!(forward, different);
    }

    #[rstest]
    fn test_owned_iteration() {
        let entries: Vec<(String, i32)> = country_codes().into_iter().collect();
        assert_eq!(entries[2], ("eritrea".to_string(), 291));
    }

    #[rstest]
    fn test_debug_prints_as_map() {
        let hash: OrderedHash<&str, i32> = [("kenya", 254)].into_iter().collect();
        assert_eq!(format!("{hash:?}"), "{\"kenya\": 254}");
    }

    #[rstest]
    fn test_element_text_and_tag() {
        let hash: OrderedHash<&str, i32> = [("kenya", 254), ("uganda", 256)].into_iter().collect();
        assert_eq!(hash.text().as_deref(), Some("{kenya => 254, uganda => 256}"));
        assert!(hash.is_a(TypeTag::Mapping));
        assert!(!hash.is_a(TypeTag::Sequence));
    }

    #[rstest]
    fn test_empty_macro() {
        let hash: OrderedHash<i32, i32> = crate::ordered_hash! {};
        assert!(hash.is_empty());
    }
}
