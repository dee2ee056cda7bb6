//! Key-value store normalization.
//!
//! Store variants differ in their native duplicate-key and size
//! semantics; [`MapStore`] is the native surface each variant declares,
//! and [`MapStoreExt`] layers the normalized contract over any of them:
//! materialize-then-delete `clear`, existence-reporting `delete`,
//! recomputed `size`, identity-minting `append`, value-equal `get_all`,
//! the `set-cookie` header accessor, and the stable sort-and-rewrite.

pub mod dictionary;
pub mod headers;
pub mod params;

pub use dictionary::Dictionary;
pub use headers::HeaderTable;
pub use params::ParamList;

use levelset_util::lazy::Lazy;
use levelset_util::sort::insertion_sort_by;
use regex::Regex;

use crate::key::Key;
use crate::value::Value;

static SET_COOKIE: Lazy<Regex> = Lazy::new(|| {
    // The pattern is a literal; it always compiles.
    Regex::new(r"(?i)^set-cookie$").expect("literal pattern")
});

/// The native surface of a key-value store variant.
pub trait MapStore {
    /// Inserts under the exact key identity, with the variant's native
    /// duplicate handling.
    fn native_insert(&mut self, key: Key, value: Value);

    /// The variant's native removal primitive. Returns whether anything
    /// was removed.
    fn native_remove(&mut self, key: &str) -> bool;

    /// Whether any entry's key matches the name, per the variant's key
    /// comparison.
    fn has(&self, key: &str) -> bool;

    /// Exact-name lookup, with the variant's native resolution rule.
    fn get(&self, key: &str) -> Option<Value>;

    /// The current entries, in insertion order.
    fn entries(&self) -> Vec<(Key, Value)>;

    /// The current keys, in insertion order.
    fn keys(&self) -> Vec<Key> {
        self.entries().into_iter().map(|(k, _)| k).collect()
    }

    /// The variant's key-name comparison (exact by default).
    fn keys_equal(&self, a: &str, b: &str) -> bool {
        a == b
    }
}

/// The normalized layer, available on every store variant.
pub trait MapStoreExt: MapStore {
    /// Empties the store. The key list is materialized in full before any
    /// deletion, so removal never races its own iteration. Idempotent.
    fn clear(&mut self) {
        let keys = self.keys();
        for key in keys {
            self.native_remove(key.text());
        }
    }

    /// Removes entries under the name, reporting whether the name existed
    /// immediately before removal. Removal itself is the variant's native
    /// primitive.
    fn delete(&mut self, key: &str) -> bool {
        let existed = self.has(key);
        self.native_remove(key);
        existed
    }

    /// The number of steps `keys()` yields, recomputed at every call.
    fn size(&self) -> usize {
        self.keys().len()
    }

    /// Inserts without ever silently overwriting: a new name inserts
    /// plainly, an existing name inserts under a freshly minted key
    /// identity that is value-equal to the original.
    fn append(&mut self, key: &str, value: Value) {
        if self.has(key) {
            self.native_insert(Key::mint(key), value);
        } else {
            self.native_insert(Key::plain(key), value);
        }
    }

    /// Every value whose key matches the name, in insertion order.
    fn get_all(&self, match_key: &str) -> Vec<Value> {
        self.entries()
            .into_iter()
            .filter(|(k, _)| self.keys_equal(k.text(), match_key))
            .map(|(_, v)| v)
            .collect()
    }

    /// Every value stored under the `set-cookie` header name
    /// (case-insensitive, trimmed), in insertion order.
    fn get_set_cookie(&self) -> Vec<Value> {
        self.entries()
            .into_iter()
            .filter(|(k, _)| SET_COOKIE.get().is_match(k.text().trim()))
            .map(|(_, v)| v)
            .collect()
    }

    /// Rewrites the store in ascending key-text order, ties broken by
    /// ascending value text. Stable, and re-inserted via `append` so
    /// duplicate-name entries survive the rewrite.
    fn sort(&mut self) {
        let mut all = self.entries();
        insertion_sort_by(&mut all, |(ak, av), (bk, bv)| {
            ak.text()
                .cmp(bk.text())
                .then_with(|| av.textual().cmp(&bv.textual()))
        });
        self.clear();
        for (key, value) in all {
            self.append(key.text(), value);
        }
    }

    /// Visits `(value, key)` over a snapshot of the entries.
    fn for_each(&self, mut f: impl FnMut(&Value, &Key)) {
        for (key, value) in self.entries() {
            f(&value, &key);
        }
    }
}

impl<T: MapStore + ?Sized> MapStoreExt for T {}
