//! The uniqueness-preserving sequence variant.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexSet;

use crate::iter::{Handle, IterKind, Provenance};
use crate::seq::ops::{self, CompareFn};
use crate::value::Value;

/// An insertion-ordered sequence that never holds duplicates
/// (same-value-zero equality).
///
/// Positional operations have no native meaning on a deduplicated
/// container, so each one is defined as: snapshot into an ordered
/// sequence, apply the positional mutation there, clear, and re-insert
/// every resulting element — re-insertion is idempotent per value, so the
/// rebuild both applies the mutation and re-deduplicates.
#[derive(Debug, Clone, Default)]
pub struct DedupSequence {
    inner: Rc<RefCell<IndexSet<Value>>>,
}

impl DedupSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(items: Vec<Value>) -> Self {
        let set = Self::new();
        for item in items {
            set.insert(item);
        }
        set
    }

    // ── Native operations ─────────────────────────────────────────────────

    /// Adds a value; returns whether it was newly inserted.
    pub fn insert(&self, value: Value) -> bool {
        self.inner.borrow_mut().insert(value)
    }

    /// Removes a value preserving the order of the rest; returns whether
    /// it was present.
    pub fn remove(&self, value: &Value) -> bool {
        self.inner.borrow_mut().shift_remove(value)
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.inner.borrow().contains(value)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Assignment to the element count is a silent no-op, never an error.
    pub fn set_len(&self, _len: usize) {}

    /// Membership is the native existence check.
    pub fn includes(&self, value: &Value) -> bool {
        self.contains(value)
    }

    /// A full eager copy of the current elements, in insertion order.
    pub fn snapshot(&self) -> Vec<Value> {
        self.inner.borrow().iter().cloned().collect()
    }

    // ── Positional operations (rebuild semantics) ─────────────────────────

    fn rebuild_with<R>(&self, mutate: impl FnOnce(&mut Vec<Value>) -> R) -> R {
        let mut items = self.snapshot();
        let out = mutate(&mut items);
        let mut set = self.inner.borrow_mut();
        set.clear();
        for item in items {
            set.insert(item);
        }
        out
    }

    pub fn sort(&self, cmp: Option<&CompareFn>) -> DedupSequence {
        self.rebuild_with(|items| ops::sort(items, cmp));
        self.clone()
    }

    pub fn reverse(&self) -> DedupSequence {
        self.rebuild_with(|items| ops::reverse(items));
        self.clone()
    }

    pub fn fill(&self, value: &Value, start: Option<i64>, end: Option<i64>) -> DedupSequence {
        self.rebuild_with(|items| ops::fill(items, value, start, end));
        self.clone()
    }

    pub fn copy_within(
        &self,
        target: Option<i64>,
        start: Option<i64>,
        end: Option<i64>,
    ) -> DedupSequence {
        self.rebuild_with(|items| ops::copy_within(items, target, start, end));
        self.clone()
    }

    /// Returns the removed elements; the kept (and inserted) elements are
    /// re-deduplicated in place.
    pub fn splice(
        &self,
        start: Option<i64>,
        delete_count: Option<i64>,
        inserts: &[Value],
    ) -> Vec<Value> {
        self.rebuild_with(|items| ops::splice(items, start, delete_count, inserts))
    }

    /// Returns the post-mutation element count.
    pub fn push(&self, new: &[Value]) -> usize {
        self.rebuild_with(|items| {
            ops::push(items, new);
        });
        self.len()
    }

    pub fn pop(&self) -> Value {
        self.rebuild_with(ops::pop)
    }

    pub fn shift(&self) -> Value {
        self.rebuild_with(ops::shift)
    }

    pub fn unshift(&self, new: &[Value]) -> usize {
        self.rebuild_with(|items| {
            ops::unshift(items, new);
        });
        self.len()
    }

    // ── Iteration operations ──────────────────────────────────────────────

    pub fn values(&self) -> Handle {
        self.handle(IterKind::Values)
    }

    /// Keys of a keyless container are its values.
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
        Handle::tagged(Provenance::Dedup(self.clone()), kind)
    }

    pub(crate) fn yield_at(&self, kind: IterKind, index: usize) -> Option<Value> {
        let set = self.inner.borrow();
        let item = set.get_index(index)?;
        Some(match kind {
            IterKind::Values | IterKind::Keys | IterKind::Default => item.clone(),
            IterKind::Entries => Value::List(vec![item.clone(), item.clone()]),
        })
    }
}

/// Element-wise equality in insertion order.
impl PartialEq for DedupSequence {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot() == other.snapshot()
    }
}
