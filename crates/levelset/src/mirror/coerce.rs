//! Per-variant result coercion.

use crate::value::Value;
use crate::variants::DedupSequence;

use super::canon::RawResult;
use super::{Invoked, Target};

/// Coerces a canonical raw result into the calling variant's natural
/// shape. Only sequence-shaped results are variant-sensitive; scalars and
/// counts pass through unchanged.
pub(super) fn coerce(target: &Target, raw: RawResult) -> Invoked {
    let items = match raw {
        RawResult::List(items) => items,
        other => return other.into_invoked(),
    };
    match target {
        // All-text sequences concatenate back into one text value.
        Target::Text(_) => {
            if items.iter().all(|v| matches!(v, Value::Str(_))) {
                let joined: String = items
                    .iter()
                    .map(|v| match v {
                        Value::Str(s) => s.as_str(),
                        _ => "",
                    })
                    .collect();
                Invoked::Value(Value::Str(joined))
            } else {
                Invoked::Value(Value::List(items))
            }
        }
        // Sequence-shaped results re-wrap, re-deduplicating on insert.
        Target::Dedup(_) => Invoked::Dedup(DedupSequence::from_values(items)),
        // The result is handed back as the underlying linear buffer.
        Target::Bytes(view) => Invoked::Value(Value::Bytes(view.encode_result(&items))),
        // Live collections are not reconstructable; raw sequence results
        // stay raw. The canonical sequence never mirrors.
        Target::Live(_) | Target::Sequence(_) => Invoked::Value(Value::List(items)),
    }
}
