//! levelset — one operation surface for heterogeneous container types.
//!
//! A family of container variants (ordered sequence, text sequence,
//! uniqueness-preserving sequence, binary buffer view, live host-provided
//! collection, key-value stores) exposes the reference sequence's
//! capability set uniformly: operations a variant lacks are installed as
//! mirrors (materialize → canonical → coerce) in a process-wide registry,
//! iterator handles carry provenance so re-derivation always reflects the
//! source container's current state, and the key-value stores share one
//! normalized clear/delete/size/append/get_all/sort contract.
//!
//! Installation runs once, lazily, behind [`install`]; it is idempotent
//! and a rejected definition never aborts the rest of the pass.

pub mod error;
pub mod iter;
pub mod key;
pub mod maplike;
pub mod mirror;
pub mod seq;
pub mod value;
pub mod variants;

pub use error::CallError;
pub use iter::{Handle, IterKind, Provenance};
pub use key::Key;
pub use maplike::{Dictionary, HeaderTable, MapStore, MapStoreExt, ParamList};
pub use mirror::{install, registry, CallArgs, CanonicalOp, Invoked, Registry, Target, VariantKind};
pub use seq::Sequence;
pub use value::Value;
pub use variants::{ByteView, DedupSequence, LiveCollection, Text};

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
