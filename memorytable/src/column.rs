//! Projection of records to a derived value.

use crate::Table;

/// A borrowed view of records that projects each of them to a value.
///
/// The projected values come back as a plain `Vec`, since they generally have no
/// identity of their own to build a [`Table`] around.
#[derive(Debug)]
pub struct Column<'a, T> {
    records: &'a [T],
}

impl<T> Clone for Column<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<'_, T> {}

impl<'a, T> Column<'a, T> {
    pub fn new(records: &'a [T]) -> Self {
        Self { records }
    }

    /// The value `project` extracts from each record, in order.
    pub fn column<V, F>(&self, project: F) -> Vec<V>
    where
        F: FnMut(&'a T) -> V,
    {
        column(self.records, project)
    }

    /// Same as [`column`](Column::column).
    pub fn map<V, F>(&self, project: F) -> Vec<V>
    where
        F: FnMut(&'a T) -> V,
    {
        map(self.records, project)
    }
}

impl<T> Table<T> {
    /// A projection view over the records of this table.
    pub fn columns(&self) -> Column<'_, T> {
        Column::new(self.to_slice())
    }
}

/// The value `project` extracts from each record, in order.
pub fn column<'a, T, V, F>(records: &'a [T], project: F) -> Vec<V>
where
    F: FnMut(&'a T) -> V,
{
    records.iter().map(project).collect()
}

/// Same as [`column`].
pub fn map<'a, T, V, F>(records: &'a [T], project: F) -> Vec<V>
where
    F: FnMut(&'a T) -> V,
{
    column(records, project)
}
