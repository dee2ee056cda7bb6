//! Attribute tables with controlled enumerability and mutability.
//!
//! An [`AttrTable`] is an insertion-ordered map of named slots, where every
//! slot records whether it shows up in enumeration and whether it may be
//! redefined. It is the single definition primitive the levelset core uses
//! when populating per-variant operation tables.

use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttrError {
    #[error("attribute `{0}` is frozen and cannot be redefined")]
    Frozen(String),
}

/// Enumerability and mutability of a slot being defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrOptions {
    pub enumerable: bool,
    pub mutable: bool,
}

impl AttrOptions {
    /// Non-enumerable, redefinable. The default for installed methods.
    pub const METHOD: AttrOptions = AttrOptions {
        enumerable: false,
        mutable: true,
    };

    /// Non-enumerable, permanent. Rejects any later redefinition.
    pub const FROZEN: AttrOptions = AttrOptions {
        enumerable: false,
        mutable: false,
    };

    /// Enumerable, redefinable.
    pub const ENUMERABLE: AttrOptions = AttrOptions {
        enumerable: true,
        mutable: true,
    };
}

/// A defined attribute: its value plus the options it was defined with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrSlot<T> {
    pub value: T,
    pub enumerable: bool,
    pub mutable: bool,
}

/// An insertion-ordered table of named attribute slots.
///
/// # Examples
///
/// ```
/// use levelset_util::attrs::{AttrOptions, AttrTable};
///
/// let mut table = AttrTable::new();
/// table.define_attribute("push", 1, AttrOptions::METHOD).unwrap();
/// assert!(table.has_own_attribute("push"));
/// assert!(!table.has_own_attribute("pop"));
///
/// // Frozen slots reject redefinition.
/// table.define_attribute("len", 2, AttrOptions::FROZEN).unwrap();
/// assert!(table.define_attribute("len", 3, AttrOptions::METHOD).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct AttrTable<T> {
    slots: IndexMap<String, AttrSlot<T>>,
}

impl<T> Default for AttrTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AttrTable<T> {
    pub fn new() -> Self {
        Self {
            slots: IndexMap::new(),
        }
    }

    /// Defines (or redefines) an attribute. Redefinition of a slot that was
    /// defined with `mutable: false` is rejected.
    pub fn define_attribute(
        &mut self,
        name: &str,
        value: T,
        opts: AttrOptions,
    ) -> Result<(), AttrError> {
        if let Some(existing) = self.slots.get(name) {
            if !existing.mutable {
                return Err(AttrError::Frozen(name.to_string()));
            }
        }
        self.slots.insert(
            name.to_string(),
            AttrSlot {
                value,
                enumerable: opts.enumerable,
                mutable: opts.mutable,
            },
        );
        Ok(())
    }

    /// Defines the attribute only if no slot with that name exists yet.
    /// Returns `true` when a new slot was created.
    pub fn define_if_absent(&mut self, name: &str, value: T, opts: AttrOptions) -> bool {
        if self.slots.contains_key(name) {
            return false;
        }
        self.slots.insert(
            name.to_string(),
            AttrSlot {
                value,
                enumerable: opts.enumerable,
                mutable: opts.mutable,
            },
        );
        true
    }

    /// Whether the table itself carries a slot with this name.
    pub fn has_own_attribute(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.slots.get(name).map(|slot| &slot.value)
    }

    pub fn get_slot(&self, name: &str) -> Option<&AttrSlot<T>> {
        self.slots.get(name)
    }

    /// All slot names, in definition order.
    pub fn own_keys(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Only the names of enumerable slots, in definition order.
    pub fn enumerable_keys(&self) -> impl Iterator<Item = &str> {
        self.slots
            .iter()
            .filter(|(_, slot)| slot.enumerable)
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_lookup() {
        let mut table = AttrTable::new();
        table.define_attribute("a", 1, AttrOptions::METHOD).unwrap();
        table
            .define_attribute("b", 2, AttrOptions::ENUMERABLE)
            .unwrap();

        assert!(table.has_own_attribute("a"));
        assert_eq!(table.get("a"), Some(&1));
        assert_eq!(table.get("b"), Some(&2));
        assert_eq!(table.get("c"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_frozen_rejects_redefinition() {
        let mut table = AttrTable::new();
        table
            .define_attribute("len", 10, AttrOptions::FROZEN)
            .unwrap();

        let err = table
            .define_attribute("len", 20, AttrOptions::METHOD)
            .unwrap_err();
        assert_eq!(err, AttrError::Frozen("len".to_string()));
        // The original value survives the rejected definition.
        assert_eq!(table.get("len"), Some(&10));
    }

    #[test]
    fn test_mutable_allows_redefinition() {
        let mut table = AttrTable::new();
        table.define_attribute("x", 1, AttrOptions::METHOD).unwrap();
        table.define_attribute("x", 2, AttrOptions::METHOD).unwrap();
        assert_eq!(table.get("x"), Some(&2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_define_if_absent() {
        let mut table = AttrTable::new();
        assert!(table.define_if_absent("x", 1, AttrOptions::METHOD));
        assert!(!table.define_if_absent("x", 2, AttrOptions::METHOD));
        assert_eq!(table.get("x"), Some(&1));
    }

    #[test]
    fn test_enumerable_keys() {
        let mut table = AttrTable::new();
        table.define_attribute("a", 1, AttrOptions::METHOD).unwrap();
        table
            .define_attribute("b", 2, AttrOptions::ENUMERABLE)
            .unwrap();
        table.define_attribute("c", 3, AttrOptions::FROZEN).unwrap();

        let enumerable: Vec<&str> = table.enumerable_keys().collect();
        assert_eq!(enumerable, vec!["b"]);
        let all: Vec<&str> = table.own_keys().collect();
        assert_eq!(all, vec!["a", "b", "c"]);
    }
}
