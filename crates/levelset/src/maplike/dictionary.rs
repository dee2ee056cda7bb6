//! The identity-keyed, single-valued-per-identity store variant.

use indexmap::IndexMap;

use crate::key::Key;
use crate::value::Value;

use super::MapStore;

/// A store whose native insert replaces the entry with the identical key
/// identity and appends otherwise.
///
/// With only plain keys this behaves as a single-valued map; minted keys
/// (from `append`) give it multi-value-per-name semantics. Exact-name
/// lookup resolves to the newest value-equal entry.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: IndexMap<Key, Value>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain-keyed insert: replaces the existing plain entry of the same
    /// name, if any.
    pub fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(Key::plain(key), value);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MapStore for Dictionary {
    fn native_insert(&mut self, key: Key, value: Value) {
        self.entries.insert(key, value);
    }

    fn native_remove(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        // Order-preserving removal of every value-equal entry.
        self.entries.retain(|k, _| k.text() != key);
        self.entries.len() != before
    }

    fn has(&self, key: &str) -> bool {
        self.entries.keys().any(|k| k.text() == key)
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k.text() == key)
            .map(|(_, v)| v.clone())
    }

    fn entries(&self) -> Vec<(Key, Value)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maplike::MapStoreExt;

    #[test]
    fn test_set_replaces_plain_entry() {
        let mut dict = Dictionary::new();
        dict.set("a", Value::Int(1));
        dict.set("a", Value::Int(2));
        assert_eq!(dict.size(), 1);
        assert_eq!(dict.get("a"), Some(Value::Int(2)));
    }

    #[test]
    fn test_minted_inserts_coexist() {
        let mut dict = Dictionary::new();
        dict.set("a", Value::Int(1));
        dict.native_insert(Key::mint("a"), Value::Int(2));
        assert_eq!(dict.size(), 2);
        // Newest value-equal entry wins exact-name lookup.
        assert_eq!(dict.get("a"), Some(Value::Int(2)));
    }

    #[test]
    fn test_remove_drops_all_value_equal_entries() {
        let mut dict = Dictionary::new();
        dict.set("a", Value::Int(1));
        dict.native_insert(Key::mint("a"), Value::Int(2));
        dict.set("b", Value::Int(3));
        assert!(dict.native_remove("a"));
        assert!(!dict.native_remove("a"));
        assert_eq!(dict.size(), 1);
        assert!(dict.has("b"));
    }
}
