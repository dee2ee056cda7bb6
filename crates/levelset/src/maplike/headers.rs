//! The header-table store variant.

use crate::key::Key;
use crate::value::Value;

use super::{MapStore, MapStoreExt};

/// A store whose key comparison is case-insensitive and
/// whitespace-trimmed, and whose exact-name lookup joins every matching
/// value with `", "`.
#[derive(Debug, Clone, Default)]
pub struct HeaderTable {
    pairs: Vec<(Key, Value)>,
}

fn names_equal(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

impl HeaderTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl MapStore for HeaderTable {
    fn native_insert(&mut self, key: Key, value: Value) {
        self.pairs.push((key, value));
    }

    fn native_remove(&mut self, key: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| !names_equal(k.text(), key));
        self.pairs.len() != before
    }

    fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| names_equal(k.text(), key))
    }

    fn get(&self, key: &str) -> Option<Value> {
        let matching: Vec<String> = self
            .pairs
            .iter()
            .filter(|(k, _)| names_equal(k.text(), key))
            .map(|(_, v)| v.textual())
            .collect();
        if matching.is_empty() {
            None
        } else {
            Some(Value::Str(matching.join(", ")))
        }
    }

    fn entries(&self) -> Vec<(Key, Value)> {
        self.pairs.clone()
    }

    fn keys_equal(&self, a: &str, b: &str) -> bool {
        names_equal(a, b)
    }
}
