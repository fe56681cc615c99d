use log::error;
use serde::{de::DeserializeOwned, Serialize};

use crate::{Result, Table};

impl<T: Serialize> Table<T> {
    /// Encodes the records as a JSON array.
    pub fn json(&self) -> Result<String> {
        Ok(serde_json::to_string(self.to_slice())?)
    }

    /// Encodes the records as a JSON array.
    ///
    /// # Panics
    ///
    /// Panics when a record can not be encoded, for example a map keyed by a
    /// non-string type. Use [`json`](Table::json) to handle the error instead.
    pub fn json_must(&self) -> String {
        match serde_json::to_string(self.to_slice()) {
            Ok(json) => json,
            Err(err) => {
                error!("json_must: encoding {} records failed: {}", self.count(), err);
                panic!("json marshal error in Table::json_must: {err}");
            }
        }
    }
}

impl<T: DeserializeOwned> Table<T> {
    /// Decodes a table from a JSON array, as produced by [`json`](Table::json).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::TableError;

    #[test]
    fn encodes_as_array() {
        let table = Table::new(["a", "b"]);
        assert_eq!(table.json().unwrap(), r#"["a","b"]"#);
        assert_eq!(Table::<u8>::default().json_must(), "[]");
    }

    #[test]
    fn rejects_non_string_map_keys() {
        let mut record = HashMap::new();
        record.insert((1, 2), "pair");
        let table = Table::new([record]);
        assert!(matches!(table.json(), Err(TableError::Json(_))));
    }

    #[test]
    #[should_panic(expected = "json marshal error")]
    fn json_must_panics_on_failure() {
        let mut record = HashMap::new();
        record.insert((1, 2), "pair");
        Table::new([record]).json_must();
    }

    #[test]
    fn from_json_reports_malformed_input() {
        assert!(matches!(
            Table::<u32>::from_json("[1, 2,"),
            Err(TableError::Json(_))
        ));
    }
}
