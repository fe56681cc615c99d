//! Intersection, difference and subset checks by identity.
//!
//! Every operation builds one `AHashSet` of identities from its argument and scans
//! the other side once, so all of them are `O(n + m)`.

use std::hash::Hash;

use ahash::AHashSet;
use log::trace;

use crate::Table;

/// Outcome of a subset check.
///
/// `is_empty_set` reports that the candidate subset was empty, in which case
/// `is_subset` is vacuously true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Subset {
    pub is_subset: bool,
    pub is_empty_set: bool,
}

fn identities<T, K, F>(records: &[T], identity: F) -> AHashSet<K>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    records.iter().map(identity).collect()
}

impl<T> Table<T> {
    /// Records of this table whose identity also appears in `other`.
    ///
    /// Keeps the order of this table and every matching occurrence, duplicates included.
    pub fn intersection<K, F>(&self, other: &Table<T>, identity: F) -> Table<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let keys = identities(other.to_slice(), &identity);
        let result: Table<T> = self
            .iter()
            .filter(|record| keys.contains(&identity(*record)))
            .cloned()
            .collect();
        trace!(
            "intersection: {} of {} records kept",
            result.count(),
            self.count()
        );
        result
    }

    /// Records of this table whose identity does not appear in `subtrahend`.
    pub fn diff<K, F>(&self, subtrahend: &Table<T>, identity: F) -> Table<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let keys = identities(subtrahend.to_slice(), &identity);
        let result: Table<T> = self
            .iter()
            .filter(|record| !keys.contains(&identity(*record)))
            .cloned()
            .collect();
        trace!("diff: {} of {} records kept", result.count(), self.count());
        result
    }

    /// Whether any record of this table has its identity in `other`.
    pub fn has_intersection<K, F>(&self, other: &Table<T>, identity: F) -> bool
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let keys = identities(other.to_slice(), &identity);
        self.iter().any(|record| keys.contains(&identity(record)))
    }

    /// Whether any record of this table has its identity missing from `subtrahend`.
    pub fn has_diff<K, F>(&self, subtrahend: &Table<T>, identity: F) -> bool
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let keys = identities(subtrahend.to_slice(), &identity);
        self.iter().any(|record| !keys.contains(&identity(record)))
    }

    /// Checks whether this table is a subset of `full_set`.
    ///
    /// An empty table is a subset of anything and reports `is_empty_set`.
    pub fn is_subset_to<K, F>(&self, full_set: &Table<T>, identity: F) -> Subset
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        contains_all(full_set, self, identity)
    }

    /// Checks whether `sub_set` is a subset of this table.
    ///
    /// An empty `sub_set` is a subset of anything and reports `is_empty_set`.
    pub fn is_subset<K, F>(&self, sub_set: &Table<T>, identity: F) -> Subset
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        contains_all(self, sub_set, identity)
    }
}

fn contains_all<T, K, F>(full_set: &Table<T>, sub_set: &Table<T>, identity: F) -> Subset
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    if sub_set.is_empty() {
        return Subset {
            is_subset: true,
            is_empty_set: true,
        };
    }

    let keys = identities(full_set.to_slice(), &identity);
    Subset {
        is_subset: sub_set.iter().all(|record| keys.contains(&identity(record))),
        is_empty_set: false,
    }
}
