use std::hash::Hash;

use ahash::{AHashMap, AHashSet};
use log::debug;

use crate::Table;

impl<T> Table<T> {
    /// Maps each identity to the record carrying it.
    ///
    /// When several records share an identity the last one wins. Compare with
    /// [`unique`](Table::unique), which keeps the first.
    pub fn index<K, F>(&self, identity: F) -> AHashMap<K, T>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut index = AHashMap::with_capacity(self.count());
        for record in self.iter() {
            index.insert(identity(record), record.clone());
        }
        if index.len() < self.count() {
            debug!(
                "index: {} records collapsed into {} identities",
                self.count(),
                index.len()
            );
        }
        index
    }

    #[deprecated(note = "use `index` instead")]
    pub fn map<K, F>(&self, identity: F) -> AHashMap<K, T>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        self.index(identity)
    }

    /// Partitions the records by `key`, keeping insertion order within each group.
    pub fn group_by<K, F>(&self, key: F) -> AHashMap<K, Vec<T>>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut groups: AHashMap<K, Vec<T>> = AHashMap::new();
        for record in self.iter() {
            groups.entry(key(record)).or_default().push(record.clone());
        }
        groups
    }

    /// Drops every record whose key was already seen. The first occurrence wins.
    pub fn unique<K, F>(&self, key: F) -> Table<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut seen = AHashSet::with_capacity(self.count());
        self.iter()
            .filter(|record| seen.insert(key(*record)))
            .cloned()
            .collect()
    }
}
