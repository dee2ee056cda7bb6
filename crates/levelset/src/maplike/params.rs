//! The ordered parameter-list store variant.

use crate::key::Key;
use crate::value::Value;

use super::MapStore;

/// A naturally multi-valued store: native insert always appends, and
/// exact-name lookup resolves to the *first* matching entry.
#[derive(Debug, Clone, Default)]
pub struct ParamList {
    pairs: Vec<(Key, Value)>,
}

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: Vec<(&str, Value)>) -> Self {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (Key::plain(k), v))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl MapStore for ParamList {
    fn native_insert(&mut self, key: Key, value: Value) {
        self.pairs.push((key, value));
    }

    fn native_remove(&mut self, key: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| k.text() != key);
        self.pairs.len() != before
    }

    fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k.text() == key)
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.pairs
            .iter()
            .find(|(k, _)| k.text() == key)
            .map(|(_, v)| v.clone())
    }

    fn entries(&self) -> Vec<(Key, Value)> {
        self.pairs.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maplike::MapStoreExt;

    #[test]
    fn test_native_insert_appends() {
        let mut params = ParamList::new();
        params.native_insert(Key::plain("q"), Value::Str("one".into()));
        params.native_insert(Key::plain("q"), Value::Str("two".into()));
        assert_eq!(params.size(), 2);
        // First match wins exact-name lookup here.
        assert_eq!(params.get("q"), Some(Value::Str("one".into())));
    }

    #[test]
    fn test_normalized_layer_applies() {
        let mut params = ParamList::from_pairs(vec![
            ("b", Value::Str("2".into())),
            ("a", Value::Str("1".into())),
        ]);
        params.sort();
        let keys: Vec<String> = params.keys().iter().map(|k| k.text().to_string()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert!(params.delete("a"));
        assert!(!params.delete("a"));
    }
}
