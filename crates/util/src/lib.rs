//! levelset-util - Utility functions for levelset
//!
//! This crate provides the attribute-table primitive consumed by the
//! levelset core, plus a handful of small helpers (lazy initialization,
//! stable insertion sort, identifier trimming).

pub mod attrs;
pub mod idents;
pub mod lazy;
pub mod sort;

// Re-exports for convenience
pub use attrs::{AttrError, AttrOptions, AttrSlot, AttrTable};
pub use idents::trailing_ident;
pub use lazy::{lazy, Lazy};
pub use sort::{insertion_sort, insertion_sort_by};
