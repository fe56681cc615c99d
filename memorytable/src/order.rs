use std::cmp::Ordering;

use crate::Table;

/// A reversed copy of `records`.
pub fn reversed<T: Clone>(records: &[T]) -> Vec<T> {
    records.iter().rev().cloned().collect()
}

impl<T> Table<T> {
    /// Sorts the table in place with `compare`.
    ///
    /// The sort is stable: records comparing equal keep their relative order.
    pub fn order_by<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_by(compare);
        self
    }

    /// A copy of this table in reverse order.
    pub fn reverse(&self) -> Table<T>
    where
        T: Clone,
    {
        Table::from(reversed(self.to_slice()))
    }

    /// Visits every record mutably along with its position.
    ///
    /// Stops at the first error returned by `visitor` and returns it. Records visited
    /// before the failure keep whatever changes the visitor made.
    pub fn walk<E, F>(&mut self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&mut T, usize) -> Result<(), E>,
    {
        for (index, record) in self.iter_mut().enumerate() {
            visitor(record, index)?;
        }
        Ok(())
    }

    /// Sums the values extracted by `extract`, wrapping on overflow.
    pub fn sum<F>(&self, extract: F) -> i64
    where
        F: Fn(&T) -> i64,
    {
        self.iter()
            .fold(0i64, |sum, record| sum.wrapping_add(extract(record)))
    }
}
