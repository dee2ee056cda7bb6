//! The method mirror engine.
//!
//! A process-wide [`Registry`] maps every container variant (and every
//! iterator family) to an operation table. Population is a one-time,
//! idempotent pass: native operations are seeded frozen, iteration
//! operations are tagged with provenance, canonical operations missing
//! from a variant are installed as mirrors, the individually specified
//! fill-ins override where the generic mirror is wrong for the variant,
//! and finally every container capability is propagated onto its iterator
//! family's table. A single rejected definition is logged and discarded;
//! it never aborts the rest of the pass.

pub mod canon;
mod coerce;

pub use canon::{CanonicalOp, RawResult};

use indexmap::IndexMap;
use levelset_util::attrs::{AttrOptions, AttrTable};
use levelset_util::idents::trailing_ident;
use levelset_util::lazy::Lazy;

use crate::error::CallError;
use crate::iter::{Handle, IterKind};
use crate::seq::ops::{CompareFn, ElementFn};
use crate::seq::Sequence;
use crate::value::Value;
use crate::variants::{ByteView, DedupSequence, LiveCollection, Text};

// ── Variant kinds and call targets ────────────────────────────────────────

/// Every operation table the registry keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Sequence,
    Text,
    Dedup,
    Bytes,
    Live,
    SequenceIter,
    TextIter,
    DedupIter,
}

impl VariantKind {
    const ALL: [VariantKind; 8] = [
        VariantKind::Sequence,
        VariantKind::Text,
        VariantKind::Dedup,
        VariantKind::Bytes,
        VariantKind::Live,
        VariantKind::SequenceIter,
        VariantKind::TextIter,
        VariantKind::DedupIter,
    ];

    /// Container families whose handles carry provenance, paired with
    /// their iterator family.
    const TAGGED: [(VariantKind, VariantKind); 3] = [
        (VariantKind::Sequence, VariantKind::SequenceIter),
        (VariantKind::Text, VariantKind::TextIter),
        (VariantKind::Dedup, VariantKind::DedupIter),
    ];
}

/// A borrowed container instance the dynamic surface dispatches on.
pub enum Target<'a> {
    Sequence(&'a Sequence),
    Text(&'a Text),
    Dedup(&'a DedupSequence),
    Bytes(&'a ByteView),
    Live(&'a LiveCollection),
}

impl Target<'_> {
    pub fn kind(&self) -> VariantKind {
        match self {
            Target::Sequence(_) => VariantKind::Sequence,
            Target::Text(_) => VariantKind::Text,
            Target::Dedup(_) => VariantKind::Dedup,
            Target::Bytes(_) => VariantKind::Bytes,
            Target::Live(_) => VariantKind::Live,
        }
    }

    /// A full eager copy of the instance's current elements as a canonical
    /// ordered sequence. Never aliases the instance's own storage.
    pub fn materialize(&self) -> Vec<Value> {
        match self {
            Target::Sequence(s) => s.snapshot(),
            Target::Text(t) => t.chars_values(),
            Target::Dedup(d) => d.snapshot(),
            Target::Bytes(b) => b.elems(),
            Target::Live(l) => l.snapshot(),
        }
    }

    fn count(&self) -> usize {
        match self {
            Target::Sequence(s) => s.len(),
            Target::Text(t) => t.len(),
            Target::Dedup(d) => d.len(),
            Target::Bytes(b) => b.len(),
            Target::Live(l) => l.len(),
        }
    }

    fn tagged_handle(&self, kind: IterKind) -> Option<Handle> {
        match self {
            Target::Sequence(s) => Some(s.handle(kind)),
            Target::Text(t) => Some(t.handle(kind)),
            Target::Dedup(d) => Some(d.handle(kind)),
            Target::Bytes(_) | Target::Live(_) => None,
        }
    }

    fn native(&self, name: &str, args: &CallArgs) -> Result<Invoked, CallError> {
        let unknown = || CallError::UnknownOperation(name.to_string());
        match self {
            Target::Sequence(s) => {
                let op = CanonicalOp::from_name(name).ok_or_else(unknown)?;
                Ok(s.apply_in_place(op, args)?.into_invoked())
            }
            Target::Text(t) => match name {
                "slice" => Ok(Invoked::Value(Value::Str(
                    t.slice(args.int_at(0), args.int_at(1)).as_str().to_string(),
                ))),
                "includes" => {
                    let needle = args
                        .text_at(0)
                        .unwrap_or_else(|| Value::Undefined.textual());
                    Ok(Invoked::Value(Value::Bool(
                        t.includes(&needle, args.int_at(1)),
                    )))
                }
                _ => Err(unknown()),
            },
            Target::Dedup(d) => {
                let arg = || args.value_at(0).cloned().unwrap_or(Value::Undefined);
                match name {
                    "insert" => Ok(Invoked::Value(Value::Bool(d.insert(arg())))),
                    "remove" => Ok(Invoked::Value(Value::Bool(d.remove(&arg())))),
                    "contains" => Ok(Invoked::Value(Value::Bool(d.contains(&arg())))),
                    "clear" => {
                        d.clear();
                        Ok(Invoked::Value(Value::Undefined))
                    }
                    _ => Err(unknown()),
                }
            }
            Target::Bytes(b) => match name {
                "includes" => {
                    let needle = args.value_at(0).cloned().unwrap_or(Value::Undefined);
                    Ok(Invoked::Value(Value::Bool(
                        b.includes(&needle, args.int_at(1)),
                    )))
                }
                "reverse" => Ok(Invoked::Value(Value::Bytes(b.reverse().bytes()))),
                "fill" => {
                    let value = args.value_at(0).cloned().unwrap_or(Value::Undefined);
                    Ok(Invoked::Value(Value::Bytes(
                        b.fill(&value, args.int_at(1), args.int_at(2)).bytes(),
                    )))
                }
                "slice" => Ok(Invoked::Value(Value::Bytes(
                    b.slice(args.int_at(0), args.int_at(1)).bytes(),
                ))),
                _ => Err(unknown()),
            },
            Target::Live(l) => match name {
                "item" => {
                    let index = args.int_at(0).unwrap_or(0);
                    let item = if index < 0 {
                        None
                    } else {
                        l.item(index as usize)
                    };
                    Ok(Invoked::Value(item.unwrap_or(Value::Undefined)))
                }
                _ => Err(unknown()),
            },
        }
    }
}

// ── Call arguments and results ────────────────────────────────────────────

/// Positional arguments plus the optional callbacks some canonical
/// operations take.
#[derive(Clone, Copy)]
pub struct CallArgs<'a> {
    pub list: &'a [Value],
    pub func: Option<&'a ElementFn>,
    pub cmp: Option<&'a CompareFn>,
}

impl<'a> CallArgs<'a> {
    pub const EMPTY: CallArgs<'static> = CallArgs {
        list: &[],
        func: None,
        cmp: None,
    };

    pub fn new(list: &'a [Value]) -> Self {
        CallArgs {
            list,
            func: None,
            cmp: None,
        }
    }

    pub fn with_func(mut self, func: &'a ElementFn) -> Self {
        self.func = Some(func);
        self
    }

    pub fn with_cmp(mut self, cmp: &'a CompareFn) -> Self {
        self.cmp = Some(cmp);
        self
    }

    pub fn value_at(&self, index: usize) -> Option<&Value> {
        self.list.get(index)
    }

    /// Integer reading of an argument. Absent and `Undefined` read as
    /// "not given"; other non-numeric values read as zero.
    pub fn int_at(&self, index: usize) -> Option<i64> {
        match self.list.get(index) {
            None | Some(Value::Undefined) => None,
            Some(Value::Int(n)) => Some(*n),
            Some(Value::Float(f)) if f.is_finite() => Some(*f as i64),
            Some(Value::Bool(b)) => Some(*b as i64),
            Some(_) => Some(0),
        }
    }

    /// Textual reading of an argument, if present.
    pub fn text_at(&self, index: usize) -> Option<String> {
        self.list.get(index).map(|v| match v {
            Value::Str(s) => s.clone(),
            other => other.textual(),
        })
    }

    /// The arguments from `index` on.
    pub fn rest(&self, index: usize) -> &'a [Value] {
        &self.list[index.min(self.list.len())..]
    }
}

/// The result of a dynamic invocation.
#[derive(Debug)]
pub enum Invoked {
    Value(Value),
    Iter(Handle),
    /// A freshly wrapped uniqueness-preserving sequence (dedup coercion).
    Dedup(DedupSequence),
}

impl Invoked {
    pub fn into_value(self) -> Option<Value> {
        match self {
            Invoked::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_handle(self) -> Option<Handle> {
        match self {
            Invoked::Iter(h) => Some(h),
            _ => None,
        }
    }

    pub fn into_dedup(self) -> Option<DedupSequence> {
        match self {
            Invoked::Dedup(d) => Some(d),
            _ => None,
        }
    }
}

// ── Slots ─────────────────────────────────────────────────────────────────

/// How an installed operation executes.
#[derive(Debug, Clone)]
pub enum Imp {
    /// The variant's own authoritative implementation.
    Native,
    /// Materialize, apply the canonical operation, coerce.
    Mirror(CanonicalOp),
    /// Iteration operation on a tagged container: provenance handle.
    Tagged(IterKind),
    /// Iteration operation over a materialized snapshot sequence.
    SnapshotIter(IterKind),
    /// Iteration operation on a handle: fresh handle from provenance.
    Redirect(IterKind),
    /// Handle capability forwarded to the provenance container.
    Delegate,
    /// Read-only element count; there is nothing to assign to.
    CountGetter,
    /// An individually specified operation (see [`FillIn`]).
    FillIn(FillIn),
}

/// The operations that are specified one by one instead of derived from
/// the generic mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillIn {
    DedupSort,
    DedupReverse,
    DedupFill,
    DedupCopyWithin,
    DedupSplice,
    DedupPush,
    DedupPop,
    DedupShift,
    DedupUnshift,
    DedupIncludes,
    LiveNamedItem,
    LiveShrink,
    LiveGrow,
}

/// One installed operation.
#[derive(Debug, Clone)]
pub struct Slot {
    name: String,
    doc: Option<&'static str>,
    imp: Imp,
}

impl Slot {
    fn new(label: &str, imp: Imp) -> Self {
        let doc = match &imp {
            Imp::Mirror(op) => Some(op.describe()),
            Imp::Native => CanonicalOp::from_name(trailing_ident(label)).map(CanonicalOp::describe),
            _ => None,
        };
        Slot {
            name: trailing_ident(label).to_string(),
            doc,
            imp,
        }
    }

    /// The introspectable operation name: the trimmed identifier of the
    /// operation the slot stands in for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The canonical signature rendering, where one exists.
    pub fn describe(&self) -> Option<&'static str> {
        self.doc
    }

    pub fn imp(&self) -> &Imp {
        &self.imp
    }
}

// ── Registry ──────────────────────────────────────────────────────────────

/// The process-wide variant-kind → operation-table registry.
#[derive(Debug, Clone)]
pub struct Registry {
    tables: IndexMap<VariantKind, AttrTable<Slot>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// An empty registry with a table per variant kind.
    pub fn new() -> Self {
        let mut tables = IndexMap::new();
        for kind in VariantKind::ALL {
            tables.insert(kind, AttrTable::new());
        }
        Self { tables }
    }

    pub fn table(&self, kind: VariantKind) -> &AttrTable<Slot> {
        // Every kind's table is created in `new`.
        self.tables
            .get(&kind)
            .expect("registry holds a table per kind")
    }

    fn table_mut(&mut self, kind: VariantKind) -> &mut AttrTable<Slot> {
        self.tables
            .get_mut(&kind)
            .expect("registry holds a table per kind")
    }

    /// The canonical signature rendering of an installed operation.
    pub fn describe(&self, kind: VariantKind, name: &str) -> Option<&'static str> {
        self.table(kind).get(name).and_then(Slot::describe)
    }

    // ── Installation ──────────────────────────────────────────────────────

    /// Runs the full installation pass. Idempotent: every definition
    /// checks for an existing attribute first (or redefines an equivalent
    /// mutable slot), so re-running neither duplicates wrappers nor resets
    /// already-correct behavior.
    pub fn populate(&mut self) {
        self.seed_natives();
        self.tag_iteration();
        self.mirror_missing();
        self.fill_ins();
        self.extend_iter_tables();
        tracing::debug!("operation surface installed");
    }

    fn seed_natives(&mut self) {
        let seq = self.table_mut(VariantKind::Sequence);
        for op in CanonicalOp::ALL {
            define_missing(seq, op.name(), Imp::Native, AttrOptions::FROZEN);
        }
        define_missing(seq, "len", Imp::CountGetter, AttrOptions::FROZEN);

        let text = self.table_mut(VariantKind::Text);
        define_missing(text, "slice", Imp::Native, AttrOptions::FROZEN);
        define_missing(text, "includes", Imp::Native, AttrOptions::FROZEN);
        define_missing(text, "len", Imp::CountGetter, AttrOptions::FROZEN);

        let dedup = self.table_mut(VariantKind::Dedup);
        for name in ["insert", "remove", "clear", "contains"] {
            define_missing(dedup, name, Imp::Native, AttrOptions::FROZEN);
        }

        let bytes = self.table_mut(VariantKind::Bytes);
        for name in ["includes", "reverse", "fill", "slice"] {
            define_missing(bytes, name, Imp::Native, AttrOptions::FROZEN);
        }
        for (name, kind) in ITER_OPS {
            define_missing(bytes, name, Imp::SnapshotIter(kind), AttrOptions::FROZEN);
        }

        let live = self.table_mut(VariantKind::Live);
        define_missing(live, "item", Imp::Native, AttrOptions::FROZEN);
    }

    fn tag_iteration(&mut self) {
        for (container, iter_family) in VariantKind::TAGGED {
            let table = self.table_mut(container);
            for (name, kind) in ITER_OPS {
                define_missing(table, name, Imp::Tagged(kind), AttrOptions::METHOD);
            }
            let table = self.table_mut(iter_family);
            for (name, kind) in ITER_OPS {
                define_missing(table, name, Imp::Redirect(kind), AttrOptions::METHOD);
            }
        }
    }

    /// Installs a mirror for every canonical operation a variant lacks.
    fn mirror_missing(&mut self) {
        for kind in [
            VariantKind::Text,
            VariantKind::Dedup,
            VariantKind::Bytes,
            VariantKind::Live,
        ] {
            let table = self.table_mut(kind);
            for op in CanonicalOp::ALL {
                define_missing(table, op.name(), Imp::Mirror(op), AttrOptions::METHOD);
            }
        }
        // Live collections lack iteration entirely; snapshot iteration
        // stands in.
        let live = self.table_mut(VariantKind::Live);
        for (name, kind) in ITER_OPS {
            define_missing(live, name, Imp::SnapshotIter(kind), AttrOptions::METHOD);
        }
    }

    fn fill_ins(&mut self) {
        let dedup = self.table_mut(VariantKind::Dedup);
        for (name, fill) in [
            ("sort", FillIn::DedupSort),
            ("reverse", FillIn::DedupReverse),
            ("fill", FillIn::DedupFill),
            ("copy_within", FillIn::DedupCopyWithin),
            ("splice", FillIn::DedupSplice),
            ("push", FillIn::DedupPush),
            ("pop", FillIn::DedupPop),
            ("shift", FillIn::DedupShift),
            ("unshift", FillIn::DedupUnshift),
            ("includes", FillIn::DedupIncludes),
        ] {
            try_define(dedup, name, Imp::FillIn(fill), AttrOptions::METHOD);
        }
        define_missing(dedup, "len", Imp::CountGetter, AttrOptions::METHOD);

        let bytes = self.table_mut(VariantKind::Bytes);
        define_missing(bytes, "len", Imp::CountGetter, AttrOptions::METHOD);

        let live = self.table_mut(VariantKind::Live);
        for (name, fill) in [
            ("named_item", FillIn::LiveNamedItem),
            ("shrink", FillIn::LiveShrink),
            ("grow", FillIn::LiveGrow),
        ] {
            try_define(live, name, Imp::FillIn(fill), AttrOptions::METHOD);
        }
    }

    /// Propagates every container capability onto the container's iterator
    /// family as a delegating entry, so feature probing on a handle is
    /// satisfied wherever it is on the container.
    fn extend_iter_tables(&mut self) {
        for (container, iter_family) in VariantKind::TAGGED {
            let names: Vec<String> = self
                .table(container)
                .own_keys()
                .map(str::to_string)
                .collect();
            let table = self.table_mut(iter_family);
            for name in names {
                define_missing(table, &name, Imp::Delegate, AttrOptions::METHOD);
            }
        }
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Invokes an operation on a container instance.
    pub fn invoke(
        &self,
        target: &Target,
        name: &str,
        args: &CallArgs,
    ) -> Result<Invoked, CallError> {
        let slot = self
            .table(target.kind())
            .get(name)
            .ok_or_else(|| CallError::UnknownOperation(name.to_string()))?;
        match slot.imp() {
            Imp::Native => target.native(name, args),
            Imp::Mirror(op) => {
                let mut items = target.materialize();
                let raw = op.apply(&mut items, args)?;
                Ok(coerce::coerce(target, raw))
            }
            Imp::Tagged(kind) => target
                .tagged_handle(*kind)
                .map(Invoked::Iter)
                .ok_or_else(|| CallError::UnknownOperation(name.to_string())),
            Imp::SnapshotIter(kind) => Ok(Invoked::Iter(
                Sequence::from_values(target.materialize()).handle(*kind),
            )),
            Imp::CountGetter => Ok(Invoked::Value(Value::Int(target.count() as i64))),
            Imp::FillIn(fill) => apply_fill_in(*fill, target, name, args),
            // Handle-table implementations never dispatch on a container.
            Imp::Redirect(_) | Imp::Delegate => {
                Err(CallError::UnknownOperation(name.to_string()))
            }
        }
    }

    /// Invokes an operation on an iterator handle: iteration operations
    /// redirect, everything else delegates to the provenance container.
    pub fn invoke_handle(
        &self,
        handle: &Handle,
        name: &str,
        args: &CallArgs,
    ) -> Result<Invoked, CallError> {
        let slot = self
            .table(handle.family())
            .get(name)
            .ok_or_else(|| CallError::UnknownOperation(name.to_string()))?;
        match slot.imp() {
            Imp::Redirect(kind) => Ok(Invoked::Iter(handle.redirect(*kind))),
            Imp::Delegate => {
                let target = handle.delegate_target()?;
                self.invoke(&target, name, args)
            }
            _ => Err(CallError::UnknownOperation(name.to_string())),
        }
    }
}

/// The iteration operations, by table name.
const ITER_OPS: [(&str, IterKind); 4] = [
    ("values", IterKind::Values),
    ("keys", IterKind::Keys),
    ("entries", IterKind::Entries),
    ("iter", IterKind::Default),
];

fn define_missing(table: &mut AttrTable<Slot>, label: &str, imp: Imp, opts: AttrOptions) {
    let slot = Slot::new(label, imp);
    let name = slot.name().to_string();
    if !table.define_if_absent(&name, slot, opts) {
        tracing::trace!(attribute = %name, "already present, skipping");
    }
}

fn try_define(table: &mut AttrTable<Slot>, label: &str, imp: Imp, opts: AttrOptions) {
    let slot = Slot::new(label, imp);
    let name = slot.name().to_string();
    if let Err(err) = table.define_attribute(&name, slot, opts) {
        tracing::debug!(attribute = %name, error = %err, "definition rejected, skipping");
    }
}

fn apply_fill_in(
    fill: FillIn,
    target: &Target,
    name: &str,
    args: &CallArgs,
) -> Result<Invoked, CallError> {
    let arg = || args.value_at(0).cloned().unwrap_or(Value::Undefined);
    match (fill, target) {
        (FillIn::DedupSort, Target::Dedup(d)) => Ok(Invoked::Dedup(d.sort(args.cmp))),
        (FillIn::DedupReverse, Target::Dedup(d)) => Ok(Invoked::Dedup(d.reverse())),
        (FillIn::DedupFill, Target::Dedup(d)) => Ok(Invoked::Dedup(d.fill(
            &arg(),
            args.int_at(1),
            args.int_at(2),
        ))),
        (FillIn::DedupCopyWithin, Target::Dedup(d)) => Ok(Invoked::Dedup(d.copy_within(
            args.int_at(0),
            args.int_at(1),
            args.int_at(2),
        ))),
        (FillIn::DedupSplice, Target::Dedup(d)) => Ok(Invoked::Value(Value::List(d.splice(
            args.int_at(0),
            args.int_at(1),
            args.rest(2),
        )))),
        (FillIn::DedupPush, Target::Dedup(d)) => {
            Ok(Invoked::Value(Value::Int(d.push(args.list) as i64)))
        }
        (FillIn::DedupPop, Target::Dedup(d)) => Ok(Invoked::Value(d.pop())),
        (FillIn::DedupShift, Target::Dedup(d)) => Ok(Invoked::Value(d.shift())),
        (FillIn::DedupUnshift, Target::Dedup(d)) => {
            Ok(Invoked::Value(Value::Int(d.unshift(args.list) as i64)))
        }
        (FillIn::DedupIncludes, Target::Dedup(d)) => {
            Ok(Invoked::Value(Value::Bool(d.includes(&arg()))))
        }
        (FillIn::LiveNamedItem, Target::Live(l)) => {
            let key = args.text_at(0).unwrap_or_default();
            Ok(Invoked::Value(
                l.named_item(&key).unwrap_or(Value::Undefined),
            ))
        }
        (FillIn::LiveShrink, Target::Live(l)) => {
            Ok(Invoked::Value(Value::Int(l.shrink() as i64)))
        }
        (FillIn::LiveGrow, Target::Live(l)) => Ok(Invoked::Value(Value::Int(
            l.grow(args.list.to_vec()) as i64,
        ))),
        _ => Err(CallError::UnknownOperation(name.to_string())),
    }
}

// ── Global installation ───────────────────────────────────────────────────

static REGISTRY: Lazy<Registry> = Lazy::new(build_registry);

fn build_registry() -> Registry {
    let mut registry = Registry::new();
    registry.populate();
    registry
}

/// The installed process-wide registry, installing on first use.
pub fn registry() -> &'static Registry {
    REGISTRY.get()
}

/// Runs the one-time installation pass. Safe to call any number of times.
pub fn install() {
    let _ = registry();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populate_is_idempotent() {
        let mut registry = Registry::new();
        registry.populate();
        let sizes: Vec<usize> = VariantKind::ALL
            .iter()
            .map(|&k| registry.table(k).len())
            .collect();
        registry.populate();
        let again: Vec<usize> = VariantKind::ALL
            .iter()
            .map(|&k| registry.table(k).len())
            .collect();
        assert_eq!(sizes, again);
    }

    #[test]
    fn test_natives_survive_mirror_pass() {
        let mut registry = Registry::new();
        registry.populate();
        assert!(matches!(
            registry.table(VariantKind::Text).get("slice").map(Slot::imp),
            Some(Imp::Native)
        ));
        assert!(matches!(
            registry.table(VariantKind::Text).get("map").map(Slot::imp),
            Some(Imp::Mirror(CanonicalOp::Map))
        ));
    }

    #[test]
    fn test_fill_ins_override_generic_mirror() {
        let mut registry = Registry::new();
        registry.populate();
        assert!(matches!(
            registry.table(VariantKind::Dedup).get("push").map(Slot::imp),
            Some(Imp::FillIn(FillIn::DedupPush))
        ));
        assert!(matches!(
            registry.table(VariantKind::Dedup).get("map").map(Slot::imp),
            Some(Imp::Mirror(CanonicalOp::Map))
        ));
    }

    #[test]
    fn test_rejected_definition_is_isolated() {
        let mut table: AttrTable<Slot> = AttrTable::new();
        define_missing(&mut table, "frozen", Imp::Native, AttrOptions::FROZEN);
        // A rejected redefinition is discarded without panicking, and
        // later definitions still land.
        try_define(&mut table, "frozen", Imp::CountGetter, AttrOptions::METHOD);
        try_define(&mut table, "other", Imp::CountGetter, AttrOptions::METHOD);
        assert!(matches!(table.get("frozen").map(Slot::imp), Some(Imp::Native)));
        assert!(table.has_own_attribute("other"));
    }

    #[test]
    fn test_iter_tables_delegate_container_capabilities() {
        let mut registry = Registry::new();
        registry.populate();
        let table = registry.table(VariantKind::DedupIter);
        assert!(matches!(
            table.get("contains").map(Slot::imp),
            Some(Imp::Delegate)
        ));
        assert!(matches!(
            table.get("values").map(Slot::imp),
            Some(Imp::Redirect(IterKind::Values))
        ));
    }

    #[test]
    fn test_mirror_describe_matches_canonical() {
        let reg = registry();
        assert_eq!(
            reg.describe(VariantKind::Dedup, "map"),
            reg.describe(VariantKind::Sequence, "map"),
        );
        assert_eq!(
            reg.describe(VariantKind::Text, "splice"),
            Some(CanonicalOp::Splice.describe()),
        );
    }
}
