//! The binary buffer view variant.

use std::cell::RefCell;
use std::rc::Rc;

use levelset_buffers::{Elem, ElemKind, Reader, Writer};

use crate::iter::{Handle, IterKind};
use crate::seq::ops;
use crate::seq::Sequence;
use crate::value::Value;

/// A fixed-width numeric view over a raw byte buffer.
///
/// Elements decode little-endian per the view's [`ElemKind`]. The view's
/// native operations work element-wise; mirrored operations materialize
/// the elements and, when the result is sequence-shaped, encode it back
/// into a fresh buffer.
#[derive(Debug, Clone)]
pub struct ByteView {
    buf: Rc<RefCell<Vec<u8>>>,
    kind: ElemKind,
}

impl ByteView {
    pub fn new(kind: ElemKind) -> Self {
        Self {
            buf: Rc::new(RefCell::new(Vec::new())),
            kind,
        }
    }

    pub fn from_bytes(bytes: Vec<u8>, kind: ElemKind) -> Self {
        Self {
            buf: Rc::new(RefCell::new(bytes)),
            kind,
        }
    }

    /// Builds a view by encoding the given values per `kind`. Non-numeric
    /// values encode as zero.
    pub fn from_values(values: &[Value], kind: ElemKind) -> Self {
        Self {
            buf: Rc::new(RefCell::new(encode(values, kind))),
            kind,
        }
    }

    pub fn elem_kind(&self) -> ElemKind {
        self.kind
    }

    pub fn byte_len(&self) -> usize {
        self.buf.borrow().len()
    }

    /// Element count: complete elements in the underlying buffer.
    pub fn len(&self) -> usize {
        self.byte_len() / self.kind.width()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Assignment to the element count is a silent no-op, never an error.
    pub fn set_len(&self, _len: usize) {}

    /// A snapshot of the underlying linear buffer.
    pub fn bytes(&self) -> Vec<u8> {
        self.buf.borrow().clone()
    }

    /// Decodes the current elements.
    pub fn elems(&self) -> Vec<Value> {
        let bytes = self.buf.borrow();
        let mut reader = Reader::new(&bytes);
        let mut out = Vec::with_capacity(self.len());
        while let Ok(elem) = self.kind.read(&mut reader) {
            out.push(match elem {
                Elem::Int(i) => Value::Int(i),
                Elem::Float(f) => Value::Float(f),
            });
        }
        out
    }

    fn store(&self, values: &[Value]) {
        *self.buf.borrow_mut() = encode(values, self.kind);
    }

    /// Encodes a sequence-shaped result into a buffer per this view's
    /// element kind.
    pub(crate) fn encode_result(&self, values: &[Value]) -> Vec<u8> {
        encode(values, self.kind)
    }

    // ── Native operations ─────────────────────────────────────────────────

    pub fn includes(&self, needle: &Value, from: Option<i64>) -> bool {
        ops::includes(&self.elems(), needle, from)
    }

    pub fn reverse(&self) -> ByteView {
        let mut elems = self.elems();
        ops::reverse(&mut elems);
        self.store(&elems);
        self.clone()
    }

    pub fn fill(&self, value: &Value, start: Option<i64>, end: Option<i64>) -> ByteView {
        let mut elems = self.elems();
        ops::fill(&mut elems, value, start, end);
        self.store(&elems);
        self.clone()
    }

    /// A new view over a fresh buffer holding the sliced elements.
    pub fn slice(&self, start: Option<i64>, end: Option<i64>) -> ByteView {
        ByteView::from_values(&ops::slice(&self.elems(), start, end), self.kind)
    }

    // ── Iteration operations ──────────────────────────────────────────────
    //
    // A view has no tagged iterator family; its handles come from a
    // sequence materialized at call time, so they are decoupled from
    // later writes through the view.

    pub fn values(&self) -> Handle {
        self.snapshot_handle(IterKind::Values)
    }

    pub fn keys(&self) -> Handle {
        self.snapshot_handle(IterKind::Keys)
    }

    pub fn entries(&self) -> Handle {
        self.snapshot_handle(IterKind::Entries)
    }

    pub fn iter(&self) -> Handle {
        self.snapshot_handle(IterKind::Default)
    }

    pub(crate) fn snapshot_handle(&self, kind: IterKind) -> Handle {
        Sequence::from_values(self.elems()).handle(kind)
    }
}

fn encode(values: &[Value], kind: ElemKind) -> Vec<u8> {
    let mut writer = Writer::with_capacity(values.len() * kind.width());
    for value in values {
        let elem = match value {
            Value::Int(i) => Elem::Int(*i),
            Value::Float(f) => Elem::Float(*f),
            Value::Bool(b) => Elem::Int(*b as i64),
            _ => Elem::Int(0),
        };
        kind.write(&mut writer, elem);
    }
    writer.flush()
}
