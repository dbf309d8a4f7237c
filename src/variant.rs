//! Switch from [`std`] to [`loom`] for [`std::sync`] and [`std::thread`] when using the `--cfg loom` flag.
//!
//! [`loom`]: https://docs.rs/loom/

#[cfg(not(loom))]
pub(crate) mod sync {
    pub(crate) use std::sync::Arc;

    use std::sync::{MutexGuard, PoisonError};

    #[derive(Debug)]
    #[repr(transparent)]
    pub(crate) struct Mutex<T>(std::sync::Mutex<T>);

    impl<T> Mutex<T> {
        pub(crate) fn new(data: T) -> Mutex<T> {
            Mutex(std::sync::Mutex::new(data))
        }

        /// Acquires the lock, recovering the guard if the mutex was poisoned.
        ///
        /// A panic while a thread holds the guard leaves the element sequence
        /// structurally valid (every mutation is a single `VecDeque` call), so
        /// the poison flag carries no information the queue needs to act on.
        pub(crate) fn lock(&self) -> MutexGuard<'_, T> {
            self.0.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }
}

#[cfg(loom)]
pub(crate) mod sync {
    pub(crate) use loom::sync::Arc;

    use loom::sync::MutexGuard;

    #[derive(Debug)]
    pub(crate) struct Mutex<T>(loom::sync::Mutex<T>);

    impl<T> Mutex<T> {
        pub(crate) fn new(data: T) -> Mutex<T> {
            Mutex(loom::sync::Mutex::new(data))
        }

        // Loom mutexes never poison; the model aborts on panic instead.
        pub(crate) fn lock(&self) -> MutexGuard<'_, T> {
            self.0.lock().unwrap()
        }
    }
}
