//! The canonical ordered sequence.

pub mod ops;

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::CallError;
use crate::iter::{Handle, IterKind, Provenance};
use crate::mirror::{CallArgs, CanonicalOp, RawResult};
use crate::value::Value;

use self::ops::{CompareFn, ElementFn};

/// An insertion-ordered, index-addressed sequence of values.
///
/// This is the reference container: its operation set defines the contract
/// every other variant mirrors. Clones share storage (the whole crate
/// assumes single-threaded cooperative execution), which is also what lets
/// iterator handles observe the sequence's current state.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    inner: Rc<RefCell<Vec<Value>>>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(items: Vec<Value>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(items)),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.inner.borrow().get(index).cloned()
    }

    /// A full eager copy of the current elements.
    pub fn snapshot(&self) -> Vec<Value> {
        self.inner.borrow().clone()
    }

    // ── Transformation operations ─────────────────────────────────────────

    pub fn map(&self, f: &ElementFn) -> Sequence {
        Sequence::from_values(ops::map(&self.inner.borrow(), f))
    }

    pub fn filter(&self, f: &ElementFn) -> Sequence {
        Sequence::from_values(ops::filter(&self.inner.borrow(), f))
    }

    pub fn slice(&self, start: Option<i64>, end: Option<i64>) -> Sequence {
        Sequence::from_values(ops::slice(&self.inner.borrow(), start, end))
    }

    pub fn sort(&self, cmp: Option<&CompareFn>) -> Sequence {
        ops::sort(&mut self.inner.borrow_mut(), cmp);
        self.clone()
    }

    pub fn reverse(&self) -> Sequence {
        ops::reverse(&mut self.inner.borrow_mut());
        self.clone()
    }

    pub fn splice(
        &self,
        start: Option<i64>,
        delete_count: Option<i64>,
        inserts: &[Value],
    ) -> Vec<Value> {
        ops::splice(&mut self.inner.borrow_mut(), start, delete_count, inserts)
    }

    pub fn fill(&self, value: &Value, start: Option<i64>, end: Option<i64>) -> Sequence {
        ops::fill(&mut self.inner.borrow_mut(), value, start, end);
        self.clone()
    }

    pub fn copy_within(
        &self,
        target: Option<i64>,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Sequence {
        ops::copy_within(&mut self.inner.borrow_mut(), target, start, end);
        self.clone()
    }

    pub fn push(&self, new: &[Value]) -> usize {
        ops::push(&mut self.inner.borrow_mut(), new)
    }

    pub fn pop(&self) -> Value {
        ops::pop(&mut self.inner.borrow_mut())
    }

    pub fn shift(&self) -> Value {
        ops::shift(&mut self.inner.borrow_mut())
    }

    pub fn unshift(&self, new: &[Value]) -> usize {
        ops::unshift(&mut self.inner.borrow_mut(), new)
    }

    pub fn includes(&self, needle: &Value, from: Option<i64>) -> bool {
        ops::includes(&self.inner.borrow(), needle, from)
    }

    /// Applies a canonical operation to the sequence's own storage. This
    /// is the native dispatch path of the dynamic surface; the mirror
    /// engine applies the same operations to materialized copies instead.
    pub(crate) fn apply_in_place(
        &self,
        op: CanonicalOp,
        args: &CallArgs,
    ) -> Result<RawResult, CallError> {
        op.apply(&mut self.inner.borrow_mut(), args)
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
        Handle::tagged(Provenance::Sequence(self.clone()), kind)
    }

    /// The element yielded at `index` for the given iteration kind, or
    /// `None` past the end. Reads the current state.
    pub(crate) fn yield_at(&self, kind: IterKind, index: usize) -> Option<Value> {
        let items = self.inner.borrow();
        let item = items.get(index)?;
        Some(match kind {
            IterKind::Values | IterKind::Default => item.clone(),
            IterKind::Keys => Value::Int(index as i64),
            IterKind::Entries => Value::List(vec![Value::Int(index as i64), item.clone()]),
        })
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Sequence::from_values(iter.into_iter().collect())
    }
}
