use std::sync::{Mutex, OnceLock};

/// Creates a lazily initialized value.
///
/// # Examples
///
/// ```
/// use levelset_util::lazy;
///
/// let expensive_value = lazy(|| 42);
/// assert_eq!(*expensive_value.get(), 42);
/// ```
pub fn lazy<T, F>(f: F) -> Lazy<T, F>
where
    F: FnOnce() -> T,
{
    Lazy::new(f)
}

/// A lazily initialized value.
///
/// The initializer runs at most once, even when `get` races across threads.
/// `new` is `const`, so a `Lazy` can back a `static` (the core crate uses
/// one as its install-once registry guard).
pub struct Lazy<T, F = fn() -> T>
where
    F: FnOnce() -> T,
{
    value: OnceLock<T>,
    init: Mutex<Option<F>>,
}

impl<T, F> Lazy<T, F>
where
    F: FnOnce() -> T,
{
    /// Create a new lazy value.
    pub const fn new(f: F) -> Self {
        Self {
            value: OnceLock::new(),
            init: Mutex::new(Some(f)),
        }
    }

    /// Get the value, initializing it if necessary.
    pub fn get(&self) -> &T {
        self.value.get_or_init(|| {
            let init = self
                .init
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .take();
            match init {
                Some(init) => init(),
                // get_or_init never runs twice for the same cell, so the
                // initializer is always still present here.
                None => unreachable!("lazy initializer already consumed"),
            }
        })
    }

    /// Whether the value has been initialized yet.
    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }
}
