//! Insertion-ordered string-keyed map.
//!
//! Score tables care about the order people and facets appear in the input
//! files: uploaded column order drives person order, row order drives facet
//! order, and both feed the first-seen deduplication rules downstream. A
//! plain `HashMap` loses that order, so this wraps the ordered key `Vec`
//! plus `HashMap` pattern into one value object.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// A string-keyed map that iterates in insertion order.
///
/// Re-inserting an existing key replaces the value but keeps the key's
/// original position, matching JSON-object semantics.
#[derive(Debug, Clone)]
pub struct OrderedMap<V> {
    keys: Vec<String>,
    values: HashMap<String, V>,
}

impl<V> OrderedMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: HashMap::new(),
        }
    }

    /// Inserts a value, preserving the key's first-seen position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        if !self.values.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.values.insert(key, value);
    }

    /// Gets a value by key.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.values.get(key)
    }

    /// Gets a mutable value by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.values.get_mut(key)
    }

    /// Returns true if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.keys.iter()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &V)> {
        self.keys.iter().map(|k| {
            let v = self
                .values
                .get(k)
                .expect("ordered key must have a value");
            (k, v)
        })
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> PartialEq for OrderedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string-keyed map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_has_no_entries() {
        let map: OrderedMap<f64> = OrderedMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert!(map.get("anything").is_none());
    }

    #[test]
    fn iterates_in_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("Talkative", 18.0);
        map.insert("Assertive", 12.0);
        map.insert("Cheerful", 9.0);

        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["Talkative", "Assertive", "Cheerful"]);
    }

    #[test]
    fn reinsert_keeps_first_seen_position() {
        let mut map = OrderedMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("a", 3);

        let entries: Vec<(&String, &i32)> = map.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "a");
        assert_eq!(*entries[0].1, 3);
        assert_eq!(entries[1].0, "b");
    }

    #[test]
    fn get_returns_inserted_value() {
        let mut map = OrderedMap::new();
        map.insert("Talkative", 18.0);
        assert_eq!(map.get("Talkative"), Some(&18.0));
        assert!(map.contains_key("Talkative"));
        assert!(!map.contains_key("Quiet"));
    }

    #[test]
    fn serializes_as_json_object_in_order() {
        let mut map = OrderedMap::new();
        map.insert("zeta", 1);
        map.insert("alpha", 2);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn deserializes_preserving_document_order() {
        let map: OrderedMap<f64> = serde_json::from_str(r#"{"b":2.0,"a":1.0}"#).unwrap();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(map.get("a"), Some(&1.0));
    }

    #[test]
    fn from_iterator_collects_in_order() {
        let map: OrderedMap<i32> = vec![("x".to_string(), 1), ("y".to_string(), 2)]
            .into_iter()
            .collect();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["x", "y"]);
    }

    #[test]
    fn equality_requires_same_order() {
        let mut a = OrderedMap::new();
        a.insert("x", 1);
        a.insert("y", 2);

        let mut b = OrderedMap::new();
        b.insert("y", 2);
        b.insert("x", 1);

        assert_ne!(a, b);
    }
}
