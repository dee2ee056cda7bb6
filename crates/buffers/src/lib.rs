//! levelset-buffers - Binary buffer primitives for levelset.
//!
//! Provides a cursor-based [`Reader`], an auto-growing [`Writer`], and the
//! [`ElemKind`] fixed-width element codec the binary-buffer-view container
//! decodes and encodes its elements with.

pub mod elem;
pub mod reader;
pub mod writer;

pub use elem::{Elem, ElemKind};
pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("read past the end of the buffer")]
    EndOfBuffer,
}
