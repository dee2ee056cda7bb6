//! The text sequence variant.

use std::rc::Rc;

use crate::iter::{Handle, IterKind, Provenance};
use crate::seq::ops::{norm_end, norm_start};
use crate::value::Value;

/// An immutable sequence of characters.
///
/// Native operations are the ones the text type authoritatively owns
/// (`slice`, `includes`, iteration); the rest of the canonical set is
/// mirrored, with sequence-shaped all-text results concatenated back into
/// one text value.
#[derive(Debug, Clone, Default)]
pub struct Text {
    inner: Rc<String>,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(text.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Character count (not byte length).
    pub fn len(&self) -> usize {
        self.inner.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The characters as one-character text values.
    pub fn chars_values(&self) -> Vec<Value> {
        self.inner
            .chars()
            .map(|c| Value::Str(c.to_string()))
            .collect()
    }

    /// Character-indexed slice with host index rules.
    pub fn slice(&self, start: Option<i64>, end: Option<i64>) -> Text {
        let len = self.len();
        let start = norm_start(len, start);
        let end = norm_end(len, end).max(start);
        Text::new(
            self.inner
                .chars()
                .skip(start)
                .take(end - start)
                .collect::<String>(),
        )
    }

    /// Substring search, optionally from a character offset.
    pub fn includes(&self, needle: &str, from: Option<i64>) -> bool {
        let start = norm_start(self.len(), from);
        let tail: String = self.inner.chars().skip(start).collect();
        tail.contains(needle)
    }

    // ── Iteration operations ──────────────────────────────────────────────

    pub fn values(&self) -> Handle {
        self.handle(IterKind::Values)
    }

    pub fn keys(&self) -> Handle {
        self.handle(IterKind::Keys)
    }

    pub fn entries(&self) -> Handle {
        self.handle(IterKind::Entries)
    }

    pub fn iter(&self) -> Handle {
        self.handle(IterKind::Default)
    }

    pub(crate) fn handle(&self, kind: IterKind) -> Handle {
        Handle::tagged(Provenance::Text(self.clone()), kind)
    }

    pub(crate) fn yield_at(&self, kind: IterKind, index: usize) -> Option<Value> {
        let c = self.inner.chars().nth(index)?;
        let ch = Value::Str(c.to_string());
        Some(match kind {
            IterKind::Values | IterKind::Default => ch,
            IterKind::Keys => Value::Int(index as i64),
            IterKind::Entries => Value::List(vec![Value::Int(index as i64), ch]),
        })
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_char_based() {
        let t = Text::new("héllo");
        assert_eq!(t.slice(Some(1), Some(3)).as_str(), "él");
        assert_eq!(t.slice(Some(-2), None).as_str(), "lo");
    }

    #[test]
    fn test_includes() {
        let t = Text::new("banana");
        assert!(t.includes("nan", None));
        assert!(!t.includes("nan", Some(3)));
        assert!(t.includes("ana", Some(-3)));
    }

    #[test]
    fn test_iteration_yields_characters() {
        let t = Text::new("ab");
        let values: Vec<Value> = t.values().collect();
        assert_eq!(values, vec![Value::Str("a".into()), Value::Str("b".into())]);
        let entries: Vec<Value> = t.entries().collect();
        assert_eq!(
            entries[0],
            Value::List(vec![Value::Int(0), Value::Str("a".into())])
        );
    }
}
