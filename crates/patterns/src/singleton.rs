//! A lazily initialized, process-wide value.
//!
//! The textbook Singleton hides its constructor and hands out one shared
//! instance on first request. In Rust the instance lives in a `static`
//! `Singleton<T>` and the first caller of `get_or_init` builds it. Racing
//! callers block until that first initializer finishes, so it runs at most
//! once.
//!
//! Complexity:
//! - get: O(1)
//! - get_or_init: O(1) after initialization

use once_cell::sync::OnceCell;

/// A thread-safe cell holding at most one lazily built value.
pub struct Singleton<T> {
    cell: OnceCell<T>,
}

impl<T> Singleton<T> {
    /// Create an empty cell. Usable in `static` items.
    pub const fn new() -> Singleton<T> {
        return Singleton {
            cell: OnceCell::new(),
        };
    }

    /// Get the instance if it has been built.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        return self.cell.get();
    }

    /// Return true once the instance exists.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        return self.cell.get().is_some();
    }

    /// Get the instance, building it with `init` on first use.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        return self.cell.get_or_init(init);
    }

    /// Get the instance, building it with a fallible `init` on first use.
    ///
    /// If `init` fails the cell stays empty and the next call tries again.
    pub fn get_or_try_init<F, E>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        return self.cell.get_or_try_init(init);
    }
}

impl<T> Default for Singleton<T> {
    fn default() -> Singleton<T> {
        return Singleton::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    #[test]
    fn starts_empty() {
        let cell: Singleton<u32> = Singleton::new();
        assert!(!cell.is_initialized());
        assert_eq!(cell.get(), None);
    }

    #[test]
    fn returns_same_instance() {
        let cell = Singleton::new();
        let a = cell.get_or_init(|| String::from("only"));
        let b = cell.get_or_init(|| String::from("ignored"));
        assert!(std::ptr::eq(a, b));
        assert_eq!(b, "only");
        assert!(cell.is_initialized());
    }

    #[test]
    fn static_cell_initializes_once_under_contention() {
        static CELL: Singleton<usize> = Singleton::new();
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    let value = CELL.get_or_init(|| {
                        CALLS.fetch_add(1, Ordering::SeqCst);
                        return 42;
                    });
                    assert_eq!(*value, 42);
                });
            }
        });

        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_init_leaves_cell_empty() {
        let cell: Singleton<u8> = Singleton::new();

        let err = cell.get_or_try_init(|| Err::<u8, &str>("boom"));
        assert_eq!(err, Err("boom"));
        assert!(!cell.is_initialized());

        let ok = cell.get_or_try_init(|| Ok::<u8, &str>(7));
        assert_eq!(ok, Ok(&7));
    }
}
