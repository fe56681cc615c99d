use log::debug;

use crate::{Blank, Result, Table, TableError};

impl<T> Table<T> {
    /// The first record satisfying `predicate`.
    pub fn get_one<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.iter().find(|record| predicate(record))
    }

    /// Like [`get_one`](Table::get_one), but a missing record is [`TableError::RecordNotFound`].
    pub fn get_one_with_error<P>(&self, predicate: P) -> Result<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.get_one(predicate).ok_or(TableError::RecordNotFound)
    }

    /// Like [`get_one`](Table::get_one), but a missing record is `T::default()`.
    ///
    /// A defaulted result can not be told apart from a matching record that happens
    /// to equal the default.
    pub fn get_one_with_default<P>(&self, predicate: P) -> T
    where
        T: Default + Clone,
        P: Fn(&T) -> bool,
    {
        self.get_one(predicate).cloned().unwrap_or_default()
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.to_slice().first()
    }

    pub fn first_with_default(&self) -> T
    where
        T: Default + Clone,
    {
        self.first().cloned().unwrap_or_default()
    }

    /// All records satisfying `predicate`, in order. Never fails, possibly empty.
    pub fn filter<P>(&self, predicate: P) -> Table<T>
    where
        T: Clone,
        P: Fn(&T) -> bool,
    {
        self.iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Drops the records that are [`Blank`](trait@Blank): empty strings and byte sequences, zero
    /// numbers, `None`, and structs whose fields are all blank.
    pub fn filter_empty(&self) -> Table<T>
    where
        T: Blank + Clone,
    {
        self.filter_empty_by(T::is_blank)
    }

    /// Drops the records for which `is_empty` holds.
    pub fn filter_empty_by<P>(&self, is_empty: P) -> Table<T>
    where
        T: Clone,
        P: Fn(&T) -> bool,
    {
        let kept = self.filter(|record| !is_empty(record));
        if kept.count() < self.count() {
            debug!(
                "filter_empty: dropped {} empty records",
                self.count() - kept.count()
            );
        }
        kept
    }

    pub fn contains_func<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    #[deprecated(note = "use `contains_func` instead")]
    pub fn contains_with_func<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.contains_func(predicate)
    }

    /// Whether a record equal to `value` is present, by `PartialEq`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.to_slice().contains(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_one_returns_first_match() {
        let table = Table::new([1, 2, 3, 4]);
        assert_eq!(table.get_one(|n| n % 2 == 0), Some(&2));
        assert_eq!(table.get_one(|n| *n > 10), None);
    }

    #[test]
    fn defaults_on_empty_table() {
        let table: Table<String> = Table::default();
        assert_eq!(table.first(), None);
        assert_eq!(table.first_with_default(), "");
        assert_eq!(table.get_one_with_default(|_| true), "");
    }
}
