//! Copy-out / store-back protocol for key/value tables.
//!
//! Map storage is treated as handing out values, not places: each value is
//! cloned, the clone is walked, and the clone replaces the whole entry.

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use crate::{
    error::Result,
    shape::{Mapping, Shape, Substitute},
};

/// Keyed storage that can list, fetch and overwrite entries.
///
/// Implementing this is enough to get a [`Mapping`].
pub trait MapStorage {
    type Key;
    type Value: Clone + Substitute;

    fn entry_count(&self) -> usize;

    /// The current keys, detached from the storage so entries can be
    /// overwritten while they are iterated.
    fn snapshot_keys(&self) -> Vec<Self::Key>;

    /// An owned copy of the value stored under `key`.
    fn fetch(&self, key: &Self::Key) -> Option<Self::Value>;

    /// Replace the entry under an existing `key`.
    fn store(&mut self, key: Self::Key, value: Self::Value);
}

impl<M: MapStorage> Mapping for M {
    fn entry_count(&self) -> usize {
        MapStorage::entry_count(self)
    }

    fn rewrite_values(
        &mut self,
        visit: &mut dyn FnMut(&mut dyn Substitute) -> Result<()>,
    ) -> Result<()> {
        for key in self.snapshot_keys() {
            let Some(mut copy) = self.fetch(&key) else {
                continue;
            };
            // On failure the copy is dropped and the entry keeps its old value.
            visit(&mut copy)?;
            self.store(key, copy);
        }
        Ok(())
    }
}

impl<K, V, S> MapStorage for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone + Substitute,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn snapshot_keys(&self) -> Vec<K> {
        self.keys().cloned().collect()
    }

    fn fetch(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }

    fn store(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K, V, S> Substitute for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone + Substitute,
    S: BuildHasher,
{
    fn shape(&mut self) -> Shape<'_> {
        Shape::Mapping(self)
    }
}

impl<K, V> MapStorage for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone + Substitute,
{
    type Key = K;
    type Value = V;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn snapshot_keys(&self) -> Vec<K> {
        self.keys().cloned().collect()
    }

    fn fetch(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }

    fn store(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K, V> Substitute for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone + Substitute,
{
    fn shape(&mut self) -> Shape<'_> {
        Shape::Mapping(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter(u32);

    impl Substitute for Counter {
        fn shape(&mut self) -> Shape<'_> {
            self.0 += 1;
            Shape::Opaque
        }
    }

    #[test]
    fn every_entry_is_stored_back() {
        let mut map = BTreeMap::from([("a", Counter(0)), ("b", Counter(10))]);
        map.rewrite_values(&mut |value| {
            value.shape();
            Ok(())
        })
        .unwrap();
        assert_eq!(map["a"], Counter(1));
        assert_eq!(map["b"], Counter(11));
        assert_eq!(Mapping::entry_count(&map), 2);
    }

    #[test]
    fn failed_entry_keeps_previous_value() {
        let mut map = BTreeMap::from([("a", Counter(0)), ("b", Counter(0))]);
        let err = map
            .rewrite_values(&mut |value| {
                value.shape();
                Err(crate::Error::DepthLimitExceeded { limit: 0 })
            })
            .unwrap_err();
        assert!(matches!(err, crate::Error::DepthLimitExceeded { .. }));
        // "a" is visited first and fails before store-back.
        assert_eq!(map["a"], Counter(0));
        assert_eq!(map["b"], Counter(0));
    }
}
