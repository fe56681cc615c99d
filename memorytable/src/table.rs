use std::hash::Hash;

use ahash::{AHashMap, AHashSet};
use log::{debug, trace};

/// An ordered sequence of records of one type.
///
/// The table keeps its records in insertion order and never reorders them on its
/// own, except for [`set`](Table::set) whose result order is unspecified. Records need
/// not be unique. Identity, uniqueness and grouping are always defined by the
/// functions passed to each operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Table<T> {
    records: Vec<T>,
}

/// Builds a [`Table`] from a list of records, in order.
///
/// ```
/// let numbers = memorytable::table![3, 1, 2];
/// assert_eq!(numbers.to_slice(), &[3, 1, 2]);
/// ```
#[macro_export]
macro_rules! table {
    () => {
        $crate::Table::default()
    };
    ($($record:expr),+ $(,)?) => {
        $crate::Table::from(vec![$($record),+])
    };
}

impl<T> Table<T> {
    /// Creates a table holding `records` in iteration order.
    pub fn new(records: impl IntoIterator<Item = T>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Builds one record per identity with `init`, keeping the order of `identities`.
    pub fn generate<I, F>(identities: I, init: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> T,
    {
        Self::new(identities.into_iter().map(init))
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records backing this table, without copying.
    #[inline]
    pub fn to_slice(&self) -> &[T] {
        &self.records
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.records
    }

    pub fn into_vec(self) -> Vec<T> {
        self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.records.iter_mut()
    }

    /// Merges `records` into a new table keyed by `identity`.
    ///
    /// An incoming record replaces the existing record with the same identity, or is
    /// added when there is none. Receiver records sharing an identity collapse to the
    /// last of them. The order of the result is unspecified.
    pub fn set<K, F>(&self, identity: F, records: impl IntoIterator<Item = T>) -> Table<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut merged = self.index(&identity);
        let existing = merged.len();
        let mut replaced = 0;

        for record in records {
            if merged.insert(identity(&record), record).is_some() {
                replaced += 1;
            }
        }

        trace!(
            "set: {} existing, {} replaced, {} added",
            existing,
            replaced,
            merged.len() - existing
        );

        merged.into_iter().map(|(_, record)| record).collect()
    }

    /// Replaces, in place, every record whose identity matches one of `values`.
    ///
    /// Records without a matching value are left as they are. Values matching no
    /// record are dropped, never appended. When several values share an identity the
    /// last one is used.
    pub fn update<K, F>(&mut self, identity: F, values: impl IntoIterator<Item = T>) -> &mut Self
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let values: AHashMap<K, T> = values
            .into_iter()
            .map(|value| (identity(&value), value))
            .collect();
        let mut matched = AHashSet::with_capacity(values.len());

        for record in self.records.iter_mut() {
            let key = identity(&*record);
            if let Some(value) = values.get(&key) {
                *record = value.clone();
                matched.insert(key);
            }
        }

        let dropped = values.len() - matched.len();
        if dropped > 0 {
            debug!("update: dropped {} values without a matching record", dropped);
        }

        self
    }

    /// Inserts `record` before position `index`, clamped to the bounds of the table.
    ///
    /// A negative index inserts at the front, an index past the end appends.
    pub fn insert(&mut self, record: T, index: isize) -> &mut Self {
        let position = usize::try_from(index)
            .unwrap_or(0)
            .min(self.records.len());
        self.records.insert(position, record);
        self
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> From<Vec<T>> for Table<T> {
    fn from(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T> From<Table<T>> for Vec<T> {
    fn from(table: Table<T>) -> Self {
        table.records
    }
}

impl<T> FromIterator<T> for Table<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> Extend<T> for Table<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<T> IntoIterator for Table<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Table<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Table<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter_mut()
    }
}
