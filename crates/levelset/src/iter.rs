//! Iterator handles with provenance and redirection.
//!
//! Every iteration operation on a tagged container family returns a
//! [`Handle`] carrying `{source, kind}` as explicit record fields. The
//! handle advances like any iterator; what the provenance buys is the
//! *re-derivation* contract: asking a handle for `values()`/`keys()`/
//! `entries()` yields a brand-new handle over the source container's
//! current state, while a handle that was decoupled via [`Handle::copy`]
//! is its own terminal source.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::CallError;
use crate::mirror::{registry, CallArgs, Invoked, Target, VariantKind};
use crate::seq::Sequence;
use crate::value::Value;
use crate::variants::{DedupSequence, Text};

/// Which iteration operation produced a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IterKind {
    Values,
    Keys,
    Entries,
    Default,
}

/// The originating container of a tagged handle.
#[derive(Debug, Clone)]
pub enum Provenance {
    Sequence(Sequence),
    Text(Text),
    Dedup(DedupSequence),
}

impl Provenance {
    /// The iterator family this source's handles dispatch through.
    pub fn family(&self) -> VariantKind {
        match self {
            Provenance::Sequence(_) => VariantKind::SequenceIter,
            Provenance::Text(_) => VariantKind::TextIter,
            Provenance::Dedup(_) => VariantKind::DedupIter,
        }
    }

    pub(crate) fn as_target(&self) -> Target<'_> {
        match self {
            Provenance::Sequence(s) => Target::Sequence(s),
            Provenance::Text(t) => Target::Text(t),
            Provenance::Dedup(d) => Target::Dedup(d),
        }
    }

    fn yield_at(&self, kind: IterKind, index: usize) -> Option<Value> {
        match self {
            Provenance::Sequence(s) => s.yield_at(kind, index),
            Provenance::Text(t) => t.yield_at(kind, index),
            Provenance::Dedup(d) => d.yield_at(kind, index),
        }
    }
}

#[derive(Debug, Clone)]
enum HandleState {
    /// Reads the provenance container's current state at a cursor.
    Live { cursor: usize },
    /// Reads from a private buffer; shared between a copied handle and
    /// its origin so both consume the same remaining elements.
    Buffered { buf: Rc<RefCell<VecDeque<Value>>> },
}

/// An iteration handle.
///
/// Advancing past the end keeps yielding `None`; it is never an error.
#[derive(Debug, Clone)]
pub struct Handle {
    family: VariantKind,
    source: Option<Provenance>,
    kind: IterKind,
    state: HandleState,
}

impl Handle {
    /// A live handle tagged with its provenance container.
    pub(crate) fn tagged(source: Provenance, kind: IterKind) -> Handle {
        Handle {
            family: source.family(),
            source: Some(source),
            kind,
            state: HandleState::Live { cursor: 0 },
        }
    }

    pub fn kind(&self) -> IterKind {
        self.kind
    }

    pub fn provenance(&self) -> Option<&Provenance> {
        self.source.as_ref()
    }

    /// Whether the handle has been decoupled from any source container.
    pub fn is_detached(&self) -> bool {
        self.source.is_none()
    }

    // ── Redirection ───────────────────────────────────────────────────────

    pub fn values(&self) -> Handle {
        self.redirect(IterKind::Values)
    }

    pub fn keys(&self) -> Handle {
        self.redirect(IterKind::Keys)
    }

    pub fn entries(&self) -> Handle {
        self.redirect(IterKind::Entries)
    }

    pub fn iter(&self) -> Handle {
        self.redirect(IterKind::Default)
    }

    /// With provenance: a brand-new handle of the requested kind over the
    /// source container's current state. Without: the handle is its own
    /// terminal source, so the result shares this handle's remaining
    /// elements.
    pub(crate) fn redirect(&self, kind: IterKind) -> Handle {
        match &self.source {
            Some(source) => Handle::tagged(source.clone(), kind),
            None => self.clone(),
        }
    }

    // ── Copy ──────────────────────────────────────────────────────────────

    /// Eagerly drains the remaining elements into a private buffer and
    /// returns a decoupled handle over it. The original handle cooperates:
    /// it reads from the same buffer afterwards, so later mutation of the
    /// source container affects neither.
    pub fn copy(&mut self) -> Handle {
        let remaining: VecDeque<Value> = self.by_ref().collect();
        let buf = Rc::new(RefCell::new(remaining));
        self.source = None;
        self.state = HandleState::Buffered { buf: buf.clone() };
        Handle {
            family: self.family,
            source: None,
            kind: self.kind,
            state: HandleState::Buffered { buf },
        }
    }

    // ── Dynamic surface ───────────────────────────────────────────────────

    /// Invokes an operation from the handle's operation table: the
    /// iteration operations redirect (see above), and every capability
    /// propagated from the container family delegates to the provenance
    /// container. Delegating from a detached handle is an error.
    pub fn call(&self, name: &str, args: &CallArgs) -> Result<Invoked, CallError> {
        registry().invoke_handle(self, name, args)
    }

    pub(crate) fn family(&self) -> VariantKind {
        self.family
    }

    pub(crate) fn delegate_target(&self) -> Result<Target<'_>, CallError> {
        match &self.source {
            Some(source) => Ok(source.as_target()),
            None => Err(CallError::Detached),
        }
    }
}

impl Iterator for Handle {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        match &mut self.state {
            HandleState::Live { cursor } => {
                let source = self.source.as_ref()?;
                let item = source.yield_at(self.kind, *cursor)?;
                *cursor += 1;
                Some(item)
            }
            HandleState::Buffered { buf } => buf.borrow_mut().pop_front(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[i64]) -> Sequence {
        Sequence::from_values(values.iter().map(|&i| Value::Int(i)).collect())
    }

    #[test]
    fn test_live_handle_observes_mutation() {
        let s = seq(&[1]);
        let mut handle = s.values();
        assert_eq!(handle.next(), Some(Value::Int(1)));
        s.push(&[Value::Int(2)]);
        assert_eq!(handle.next(), Some(Value::Int(2)));
        assert_eq!(handle.next(), None);
        assert_eq!(handle.next(), None);
    }

    #[test]
    fn test_redirect_produces_fresh_handle() {
        let s = seq(&[1, 2]);
        let mut values = s.values();
        values.next();
        // Re-deriving keys from a half-consumed values handle starts over.
        let keys: Vec<Value> = values.keys().collect();
        assert_eq!(keys, vec![Value::Int(0), Value::Int(1)]);
        // The original handle is unaffected by the redirection.
        assert_eq!(values.next(), Some(Value::Int(2)));
    }

    #[test]
    fn test_copy_decouples_from_source() {
        let s = seq(&[1, 2, 3]);
        let mut original = s.values();
        original.next();
        let copied = original.copy();
        s.push(&[Value::Int(9)]);
        s.fill(&Value::Int(0), None, None);

        assert!(copied.is_detached());
        let rest: Vec<Value> = copied.collect();
        assert_eq!(rest, vec![Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn test_copy_origin_shares_buffer() {
        let s = seq(&[1, 2, 3]);
        let mut original = s.values();
        let mut copied = original.copy();
        assert_eq!(copied.next(), Some(Value::Int(1)));
        // The origin cooperates on the same buffer.
        assert_eq!(original.next(), Some(Value::Int(2)));
        assert_eq!(copied.next(), Some(Value::Int(3)));
        assert_eq!(original.next(), None);
    }

    #[test]
    fn test_detached_redirect_returns_self_source() {
        let s = seq(&[1, 2]);
        let mut handle = s.values();
        let copied = handle.copy();
        let mut again = copied.values();
        assert_eq!(again.next(), Some(Value::Int(1)));
        // Shared consumption: the redirected handle drained the buffer.
        let rest: Vec<Value> = copied.collect();
        assert_eq!(rest, vec![Value::Int(2)]);
    }
}
