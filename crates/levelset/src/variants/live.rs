//! The live host-provided collection variant.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::value::Value;

#[derive(Debug, Default)]
struct LiveInner {
    /// Host-managed slots.
    slots: Vec<Value>,
    /// Synthetic entries consulted ahead of the slots; this is how the
    /// collection grows even though its slots cannot be resized directly.
    overlay: IndexMap<usize, Value>,
    /// The element count the collection reports.
    reported: usize,
}

/// A read-mostly, host-managed indexed collection.
///
/// Elements are records ([`Value::Object`]) whose `name`/`id` attributes
/// drive named lookup. The collection itself owns no canonical
/// operations; every transformation and iteration arrives through the
/// mirror engine, and results stay plain sequences (a live collection is
/// not reconstructable).
#[derive(Debug, Clone, Default)]
pub struct LiveCollection {
    inner: Rc<RefCell<LiveInner>>,
}

impl LiveCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: Vec<Value>) -> Self {
        let reported = slots.len();
        Self {
            inner: Rc::new(RefCell::new(LiveInner {
                slots,
                overlay: IndexMap::new(),
                reported,
            })),
        }
    }

    /// The reported element count.
    pub fn len(&self) -> usize {
        self.inner.borrow().reported
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ── Native operations ─────────────────────────────────────────────────

    /// Indexed lookup: the overlay shadows the host slots.
    pub fn item(&self, index: usize) -> Option<Value> {
        let inner = self.inner.borrow();
        if index >= inner.reported {
            return None;
        }
        inner
            .overlay
            .get(&index)
            .or_else(|| inner.slots.get(index))
            .cloned()
    }

    /// First element whose `name` or `id` attribute equals the given key.
    pub fn named_item(&self, key: &str) -> Option<Value> {
        let inner = self.inner.borrow();
        (0..inner.reported)
            .filter_map(|i| {
                inner
                    .overlay
                    .get(&i)
                    .or_else(|| inner.slots.get(i))
                    .cloned()
            })
            .find(|item| attr_matches(item, "name", key) || attr_matches(item, "id", key))
    }

    // ── Resizing fill-ins ─────────────────────────────────────────────────

    /// Reduces the reported count by one and best-effort removes the
    /// trailing slot. Returns the new count.
    pub fn shrink(&self) -> usize {
        let mut inner = self.inner.borrow_mut();
        if inner.reported == 0 {
            return 0;
        }
        inner.reported -= 1;
        let trailing = inner.reported;
        if inner.overlay.shift_remove(&trailing).is_none() && inner.slots.len() > trailing {
            inner.slots.pop();
        }
        inner.reported
    }

    /// Appends values through the overlay. Returns the new count.
    pub fn grow(&self, values: Vec<Value>) -> usize {
        let mut inner = self.inner.borrow_mut();
        for value in values {
            let index = inner.reported;
            inner.overlay.insert(index, value);
            inner.reported += 1;
        }
        inner.reported
    }

    /// A full eager copy of the current elements, missing slots reading
    /// as `Undefined`.
    pub fn snapshot(&self) -> Vec<Value> {
        (0..self.len())
            .map(|i| self.item(i).unwrap_or(Value::Undefined))
            .collect()
    }
}

fn attr_matches(item: &Value, attr: &str, key: &str) -> bool {
    match item {
        Value::Object(map) => matches!(map.get(attr), Some(Value::Str(s)) if s == key),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, id: &str) -> Value {
        Value::from(serde_json::json!({"name": name, "id": id}))
    }

    #[test]
    fn test_item_and_len() {
        let coll = LiveCollection::from_slots(vec![record("a", "1"), record("b", "2")]);
        assert_eq!(coll.len(), 2);
        assert_eq!(coll.item(0), Some(record("a", "1")));
        assert_eq!(coll.item(2), None);
    }

    #[test]
    fn test_named_item_matches_name_or_id() {
        let coll = LiveCollection::from_slots(vec![record("a", "1"), record("b", "2")]);
        assert_eq!(coll.named_item("b"), Some(record("b", "2")));
        assert_eq!(coll.named_item("1"), Some(record("a", "1")));
        assert_eq!(coll.named_item("zzz"), None);
    }

    #[test]
    fn test_grow_overlays_ahead_of_slots() {
        let coll = LiveCollection::from_slots(vec![record("a", "1")]);
        assert_eq!(coll.grow(vec![record("b", "2")]), 2);
        assert_eq!(coll.item(1), Some(record("b", "2")));
        assert_eq!(coll.named_item("b"), Some(record("b", "2")));
        assert_eq!(coll.snapshot().len(), 2);
    }

    #[test]
    fn test_shrink_prefers_overlay_then_slot() {
        let coll = LiveCollection::from_slots(vec![record("a", "1")]);
        coll.grow(vec![record("b", "2")]);
        assert_eq!(coll.shrink(), 1);
        assert_eq!(coll.item(1), None);
        // Next shrink removes the trailing host slot.
        assert_eq!(coll.shrink(), 0);
        assert_eq!(coll.shrink(), 0);
    }
}
