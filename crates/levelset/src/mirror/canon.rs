//! The canonical operation table the mirror engine installs from.

use crate::error::CallError;
use crate::seq::ops;
use crate::value::Value;

use super::{CallArgs, Invoked};

/// One operation from the canonical capability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalOp {
    Map,
    Filter,
    Slice,
    Sort,
    Reverse,
    Splice,
    Fill,
    CopyWithin,
    Push,
    Pop,
    Shift,
    Unshift,
    Includes,
}

/// The shape of a canonical operation's raw (pre-coercion) result.
#[derive(Debug, Clone, PartialEq)]
pub enum RawResult {
    /// Sequence-shaped: subject to per-variant coercion.
    List(Vec<Value>),
    /// A scalar that passes through coercion unchanged.
    Single(Value),
    /// A post-mutation element count.
    Count(usize),
}

impl RawResult {
    pub(crate) fn into_invoked(self) -> Invoked {
        match self {
            RawResult::List(items) => Invoked::Value(Value::List(items)),
            RawResult::Single(value) => Invoked::Value(value),
            RawResult::Count(count) => Invoked::Value(Value::Int(count as i64)),
        }
    }
}

impl CanonicalOp {
    pub const ALL: [CanonicalOp; 13] = [
        CanonicalOp::Map,
        CanonicalOp::Filter,
        CanonicalOp::Slice,
        CanonicalOp::Sort,
        CanonicalOp::Reverse,
        CanonicalOp::Splice,
        CanonicalOp::Fill,
        CanonicalOp::CopyWithin,
        CanonicalOp::Push,
        CanonicalOp::Pop,
        CanonicalOp::Shift,
        CanonicalOp::Unshift,
        CanonicalOp::Includes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CanonicalOp::Map => "map",
            CanonicalOp::Filter => "filter",
            CanonicalOp::Slice => "slice",
            CanonicalOp::Sort => "sort",
            CanonicalOp::Reverse => "reverse",
            CanonicalOp::Splice => "splice",
            CanonicalOp::Fill => "fill",
            CanonicalOp::CopyWithin => "copy_within",
            CanonicalOp::Push => "push",
            CanonicalOp::Pop => "pop",
            CanonicalOp::Shift => "shift",
            CanonicalOp::Unshift => "unshift",
            CanonicalOp::Includes => "includes",
        }
    }

    pub fn from_name(name: &str) -> Option<CanonicalOp> {
        CanonicalOp::ALL.into_iter().find(|op| op.name() == name)
    }

    /// The canonical rendering of the operation's signature. Installed
    /// stand-ins report the same rendering, so signature probing cannot
    /// tell them apart from the canonical implementation.
    pub fn describe(self) -> &'static str {
        match self {
            CanonicalOp::Map => "map(callback)",
            CanonicalOp::Filter => "filter(predicate)",
            CanonicalOp::Slice => "slice(start, end)",
            CanonicalOp::Sort => "sort(compare)",
            CanonicalOp::Reverse => "reverse()",
            CanonicalOp::Splice => "splice(start, delete_count, ...items)",
            CanonicalOp::Fill => "fill(value, start, end)",
            CanonicalOp::CopyWithin => "copy_within(target, start, end)",
            CanonicalOp::Push => "push(...items)",
            CanonicalOp::Pop => "pop()",
            CanonicalOp::Shift => "shift()",
            CanonicalOp::Unshift => "unshift(...items)",
            CanonicalOp::Includes => "includes(value, from)",
        }
    }

    /// Applies the operation to an ordered sequence, mutating it where the
    /// canonical contract mutates, and returns the raw result.
    pub fn apply(self, items: &mut Vec<Value>, args: &CallArgs) -> Result<RawResult, CallError> {
        Ok(match self {
            CanonicalOp::Map => {
                let f = args.func.ok_or(CallError::MissingCallback("map"))?;
                RawResult::List(ops::map(items, f))
            }
            CanonicalOp::Filter => {
                let f = args.func.ok_or(CallError::MissingCallback("filter"))?;
                RawResult::List(ops::filter(items, f))
            }
            CanonicalOp::Slice => {
                RawResult::List(ops::slice(items, args.int_at(0), args.int_at(1)))
            }
            CanonicalOp::Sort => {
                ops::sort(items, args.cmp);
                RawResult::List(items.clone())
            }
            CanonicalOp::Reverse => {
                ops::reverse(items);
                RawResult::List(items.clone())
            }
            CanonicalOp::Splice => RawResult::List(ops::splice(
                items,
                args.int_at(0),
                args.int_at(1),
                args.rest(2),
            )),
            CanonicalOp::Fill => {
                let value = args.value_at(0).cloned().unwrap_or(Value::Undefined);
                ops::fill(items, &value, args.int_at(1), args.int_at(2));
                RawResult::List(items.clone())
            }
            CanonicalOp::CopyWithin => {
                ops::copy_within(items, args.int_at(0), args.int_at(1), args.int_at(2));
                RawResult::List(items.clone())
            }
            CanonicalOp::Push => RawResult::Count(ops::push(items, args.list)),
            CanonicalOp::Pop => RawResult::Single(ops::pop(items)),
            CanonicalOp::Shift => RawResult::Single(ops::shift(items)),
            CanonicalOp::Unshift => RawResult::Count(ops::unshift(items, args.list)),
            CanonicalOp::Includes => {
                let needle = args.value_at(0).cloned().unwrap_or(Value::Undefined);
                RawResult::Single(Value::Bool(ops::includes(items, &needle, args.int_at(1))))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for op in CanonicalOp::ALL {
            assert_eq!(CanonicalOp::from_name(op.name()), Some(op));
        }
        assert_eq!(CanonicalOp::from_name("join"), None);
    }

    #[test]
    fn test_map_requires_callback() {
        let mut items = vec![Value::Int(1)];
        let err = CanonicalOp::Map
            .apply(&mut items, &CallArgs::EMPTY)
            .unwrap_err();
        assert_eq!(err, CallError::MissingCallback("map"));
    }

    #[test]
    fn test_chainable_ops_report_post_mutation_state() {
        let mut items = vec![Value::Int(2), Value::Int(1)];
        let raw = CanonicalOp::Reverse
            .apply(&mut items, &CallArgs::EMPTY)
            .unwrap();
        assert_eq!(raw, RawResult::List(vec![Value::Int(1), Value::Int(2)]));
        assert_eq!(items, vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn test_stack_result_shapes() {
        let mut items = vec![Value::Int(1)];
        let args_list = [Value::Int(2)];
        let args = CallArgs::new(&args_list);
        assert_eq!(
            CanonicalOp::Push.apply(&mut items, &args).unwrap(),
            RawResult::Count(2)
        );
        assert_eq!(
            CanonicalOp::Pop.apply(&mut items, &CallArgs::EMPTY).unwrap(),
            RawResult::Single(Value::Int(2))
        );
    }
}
