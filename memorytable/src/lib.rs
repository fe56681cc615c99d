//! Set-like and relational operations over an in-memory sequence of records.
//!
//! A [`Table`] wraps a `Vec<T>` and offers the operations one otherwise writes by
//! hand with loops and temporary hash maps: intersection and difference, upserts,
//! grouping, deduplication, lookup and filtering. The table has no schema and
//! keeps no index. What "the same record" means is decided per call by an
//! identity function `Fn(&T) -> K` supplied by the caller, so two calls may use
//! two different notions of identity on the same table.
//!
//! # Example
//!
//! ```
//! use memorytable::{table, Table};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct User {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! let all = table![
//!     User { id: 1, name: "ada" },
//!     User { id: 2, name: "grace" },
//!     User { id: 3, name: "linus" },
//! ];
//! let banned = table![User { id: 2, name: "grace" }];
//!
//! let allowed = all.diff(&banned, |user| user.id);
//! assert_eq!(allowed.count(), 2);
//! assert!(allowed.has_intersection(&all, |user| user.id));
//! ```
//!
//! # Notes
//!
//!  - Operations returning a new `Table` clone the records they keep and never touch
//!    the receiver. `update`, `insert`, `order_by` and `walk` work in place.
//!  - `index` keeps the last record per identity, `unique` keeps the first one.
//!  - The order of a table returned by `set` is unspecified.
//!  - There is no internal locking. Share a table across threads behind your own lock.
//!  - Auxiliary maps use the `ahash` crate for hashing.
//!
//! # Features
//!
//!  - `derive` (default): the [`Record`] and [`Blank`](macro@Blank) derive macros.
//!  - `json` (default): JSON encoding through `serde_json`.

mod algebra;
mod blank;
mod column;
mod error;
mod group;
#[cfg(feature = "json")]
mod json;
mod order;
mod query;
mod table;

pub use algebra::Subset;
pub use blank::Blank;
pub use column::{column, map, Column};
pub use error::{Result, TableError};
pub use order::reversed;
pub use table::Table;

#[cfg(feature = "derive")]
pub use memorytable_derive::{Blank, Record};
