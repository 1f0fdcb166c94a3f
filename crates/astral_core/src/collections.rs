//! Ordered collection types used by the synthesis layer.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A multimap that stores multiple values per key, preserving both key
/// insertion order and the order of values under each key.
///
/// The module-info collector records every export specifier re-exporting a
/// local name here, in source order.
#[derive(Debug, Clone)]
pub struct MultiMap<K, V> {
    entries: Vec<(K, Vec<V>)>,
    index: FxHashMap<K, usize>,
}

impl<K: Eq + Hash + Clone, V> MultiMap<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: K, value: V) {
        if let Some(&idx) = self.index.get(&key) {
            self.entries[idx].1.push(value);
        } else {
            let idx = self.entries.len();
            self.index.insert(key.clone(), idx);
            self.entries.push((key, vec![value]));
        }
    }

    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.index.get(key).map(|&idx| self.entries[idx].1.as_slice())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

impl<K: Eq + Hash + Clone, V> Default for MultiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_map_value_order() {
        let mut map = MultiMap::new();
        map.insert("key", 1);
        map.insert("key", 2);
        map.insert("other", 9);
        map.insert("key", 3);
        assert_eq!(map.get(&"key"), Some(&[1, 2, 3][..]));
        assert_eq!(map.get(&"missing"), None);

        let keys: Vec<_> = map.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["key", "other"]);
    }
}
