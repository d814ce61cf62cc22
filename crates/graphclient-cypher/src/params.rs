// graphclient - Fluent Cypher statement builder for graph databases
//
// Copyright (c) 2025 graphclient contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Name-keyed parameter tables.
//!
//! Values that are not safe to inline into statement text are bound here
//! under a generated key (`p0`, `p1`, ...) and referenced as `$p0` in the
//! clause text.

use crate::config::DEFAULT_PARAMETER_PREFIX;
use crate::cypher::{is_valid_identifier, CypherValue};
use crate::error::{CypherError, Result};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Mapping from parameter name to bound value.
///
/// Key generation is driven by a counter owned by the table itself, so two
/// statements built side by side never share numbering.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterTable {
    prefix: String,
    next_index: usize,
    entries: BTreeMap<String, CypherValue>,
}

impl Default for ParameterTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterTable {
    /// Create an empty table generating `p0`, `p1`, ...
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PARAMETER_PREFIX)
    }

    /// Create an empty table generating `<prefix>0`, `<prefix>1`, ...
    ///
    /// A prefix that cannot start an identifier falls back to `p`.
    pub fn with_prefix(prefix: &str) -> Self {
        let prefix = if is_valid_identifier(prefix) {
            prefix
        } else {
            DEFAULT_PARAMETER_PREFIX
        };
        Self {
            prefix: prefix.to_string(),
            next_index: 0,
            entries: BTreeMap::new(),
        }
    }

    /// Continue numbering from `index` instead of zero.
    pub fn starting_at(mut self, index: usize) -> Self {
        self.next_index = index;
        self
    }

    /// Index the next generated key will use.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Bind a value under a freshly generated key and return the key.
    pub fn bind(&mut self, value: impl Into<CypherValue>) -> String {
        self.bind_excluding(value, |_| false)
    }

    /// Bind a value under a fresh key that is neither in this table nor
    /// rejected by `reserved`.
    pub fn bind_excluding(
        &mut self,
        value: impl Into<CypherValue>,
        reserved: impl Fn(&str) -> bool,
    ) -> String {
        loop {
            let key = format!("{}{}", self.prefix, self.next_index);
            self.next_index += 1;
            if !self.entries.contains_key(&key) && !reserved(&key) {
                self.entries.insert(key.clone(), value.into());
                return key;
            }
        }
    }

    /// Bind a value under a caller-chosen name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<CypherValue>) -> Result<()> {
        let name = name.into();
        if !is_valid_identifier(&name) {
            return Err(CypherError::argument(
                "name",
                format!("'{}' is not a valid parameter name", name),
            ));
        }
        if self.entries.contains_key(&name) {
            return Err(CypherError::DuplicateParameter(name));
        }
        self.entries.insert(name, value.into());
        Ok(())
    }

    /// Combine two tables, failing if any key appears in both.
    ///
    /// The merged table keeps this table's prefix and continues numbering
    /// after the higher of the two counters.
    pub fn merge(mut self, other: ParameterTable) -> Result<Self> {
        if let Some(key) = other.entries.keys().find(|k| self.entries.contains_key(*k)) {
            return Err(CypherError::DuplicateParameter(key.clone()));
        }
        self.next_index = self.next_index.max(other.next_index);
        self.entries.extend(other.entries);
        Ok(self)
    }

    /// Look up a bound value.
    pub fn get(&self, name: &str) -> Option<&CypherValue> {
        self.entries.get(name)
    }

    /// Check whether a key is bound.
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over bindings in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CypherValue)> {
        self.entries.iter()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the table, keeping only the bindings.
    pub fn into_map(self) -> BTreeMap<String, CypherValue> {
        self.entries
    }
}

impl Serialize for ParameterTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_generates_sequential_keys() {
        let mut table = ParameterTable::new();
        assert_eq!(table.bind(10i64), "p0");
        assert_eq!(table.bind("x"), "p1");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("p0"), Some(&CypherValue::Int(10)));
        assert_eq!(table.next_index(), 2);
    }

    #[test]
    fn test_counters_are_per_table() {
        let mut a = ParameterTable::new();
        let mut b = ParameterTable::new();
        assert_eq!(a.bind(1i64), "p0");
        assert_eq!(b.bind(2i64), "p0");
        assert_eq!(a.bind(3i64), "p1");
    }

    #[test]
    fn test_custom_prefix_and_fallback() {
        let mut table = ParameterTable::with_prefix("arg");
        assert_eq!(table.bind(true), "arg0");

        let mut bad = ParameterTable::with_prefix("1x");
        assert_eq!(bad.bind(true), "p0");
    }

    #[test]
    fn test_starting_at() {
        let mut table = ParameterTable::new().starting_at(5);
        assert_eq!(table.bind(0i64), "p5");
    }

    #[test]
    fn test_bind_skips_taken_keys() {
        let mut table = ParameterTable::new();
        table.insert("p0", "user").unwrap();
        assert_eq!(table.bind(1i64), "p1");

        let mut fresh = ParameterTable::new();
        assert_eq!(fresh.bind_excluding(1i64, |k| k == "p0" || k == "p1"), "p2");
    }

    #[test]
    fn test_insert_duplicate() {
        let mut table = ParameterTable::new();
        table.insert("name", "Alice").unwrap();
        let err = table.insert("name", "Bob").unwrap_err();
        assert!(matches!(err, CypherError::DuplicateParameter(ref k) if k == "name"));
        assert_eq!(table.get("name"), Some(&CypherValue::from("Alice")));
    }

    #[test]
    fn test_insert_rejects_invalid_name() {
        let mut table = ParameterTable::new();
        assert!(table.insert("bad name", 1i64).unwrap_err().is_argument_error());
        assert!(table.insert("", 1i64).unwrap_err().is_argument_error());
        assert!(table.is_empty());
    }

    #[test]
    fn test_merge() {
        let mut a = ParameterTable::new();
        a.bind(1i64);
        let mut b = ParameterTable::new().starting_at(1);
        b.bind(2i64);
        b.bind(3i64);

        let merged = a.merge(b).unwrap();
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.next_index(), 3);
        let keys: Vec<&String> = merged.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["p0", "p1", "p2"]);
    }

    #[test]
    fn test_merge_duplicate() {
        let mut a = ParameterTable::new();
        a.bind(1i64);
        let mut b = ParameterTable::new();
        b.bind(2i64);

        let err = a.merge(b).unwrap_err();
        assert!(matches!(err, CypherError::DuplicateParameter(ref k) if k == "p0"));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut table = ParameterTable::new();
        table.bind(vec![1i64, 2]);
        table.insert("name", "Alice").unwrap();
        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            serde_json::json!({"p0": [1, 2], "name": "Alice"})
        );
    }
}
