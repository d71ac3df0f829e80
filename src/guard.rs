//! Guarded two-phase execution: a primary action plus unconditional cleanup.
//!
//! Emulates scope-exit guarantees explicitly: the cleanup actions run exactly
//! once, on the same thread, strictly after the primary action — whether the
//! primary succeeded, returned a failure, or raised an unchecked one.
//! Failures aggregate instead of replacing one another:
//!
//! - primary ok, cleanups ok → the primary's value is returned
//! - primary ok, cleanup failed → the cleanup failure is raised
//! - primary failed, cleanups ok → the primary failure is raised
//! - primary failed, cleanup failed → the primary failure is raised with the
//!   cleanup failure attached as suppressed; cleanup never replaces the
//!   primary failure's identity
//!
//! All raising goes through the dispatcher, so the usual classification
//! applies (pass-through for fatal failures, I/O wrapper for `io::Error`,
//! undeclared wrapper otherwise).
//!
//! # Examples
//!
//! ```
//! use fallible_bridge::guard::Guarded;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let closed = Rc::new(Cell::new(false));
//! let handle = Rc::clone(&closed);
//!
//! let value = Guarded::new(|| Ok::<_, std::io::Error>(42))
//!     .cleanup(move || {
//!         handle.set(true);
//!         Ok::<_, std::io::Error>(())
//!     })
//!     .run();
//!
//! assert_eq!(value, 42);
//! assert!(closed.get());
//! ```

use std::error::Error;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::raise;
use crate::types::{BoxedFailure, Captured};

type CleanupFn = Box<dyn FnOnce() -> Result<(), BoxedFailure>>;

/// A primary fallible action with cleanup actions that always run.
///
/// Built with [`Guarded::new`], extended with [`cleanup`](Guarded::cleanup),
/// executed with [`run`](Guarded::run). For the common single-cleanup case
/// see [`run_guarded`].
#[must_use]
pub struct Guarded<F> {
    action: F,
    cleanups: Vec<CleanupFn>,
}

impl<F, R, E> Guarded<F>
where
    F: FnOnce() -> Result<R, E>,
    E: Error + Send + Sync + 'static,
{
    /// Starts a guarded execution around a primary action.
    ///
    /// Nothing is invoked until [`run`](Guarded::run).
    pub fn new(action: F) -> Self {
        Self { action, cleanups: Vec::new() }
    }

    /// Registers a cleanup action.
    ///
    /// Cleanups run exactly once each, in registration order, after the
    /// primary action — regardless of how the primary ended.
    pub fn cleanup<C, CE>(mut self, cleanup: C) -> Self
    where
        C: FnOnce() -> Result<(), CE> + 'static,
        CE: Error + Send + Sync + 'static,
    {
        self.cleanups.push(Box::new(move || {
            cleanup().map_err(|failure| Box::new(failure) as BoxedFailure)
        }));
        self
    }

    /// Runs the primary action, then every cleanup, then resolves the outcome.
    ///
    /// The primary runs under [`catch_unwind`] so that an unchecked failure
    /// still reaches the cleanups; the original payload is resumed untouched
    /// afterwards. When several cleanups fail, the first failure leads and
    /// the rest attach to it as suppressed.
    pub fn run(self) -> R {
        let Self { action, cleanups } = self;

        let primary = match catch_unwind(AssertUnwindSafe(action)) {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(failure)) => Err(Captured::error(failure)),
            Err(payload) => Err(Captured::Panic(payload)),
        };

        let mut failures = Vec::new();
        for cleanup in cleanups {
            match catch_unwind(AssertUnwindSafe(cleanup)) {
                Ok(Ok(())) => {}
                Ok(Err(failure)) => failures.push(failure),
                Err(payload) => failures.push(Captured::Panic(payload).into_failure()),
            }
        }

        let mut failures = failures.into_iter();
        match primary {
            Err(captured) => raise::raise_suppressing(captured, failures.collect()),
            Ok(value) => match failures.next() {
                None => value,
                Some(first) => {
                    raise::raise_suppressing(Captured::Error(first), failures.collect())
                }
            },
        }
    }
}

/// Runs a primary action guarded by a single cleanup action.
///
/// # Examples
///
/// ```
/// use fallible_bridge::{capture, guard, Unchecked};
/// use std::io;
///
/// let caught = capture(|| {
///     guard::run_guarded(
///         || Ok::<_, io::Error>("value"),
///         || Err(io::Error::new(io::ErrorKind::BrokenPipe, "close failed")),
///     )
/// });
///
/// let failure = caught.unwrap_err().into_failure();
/// let wrapped = failure.downcast_ref::<Unchecked>().unwrap();
/// assert!(wrapped.is_io());
/// ```
pub fn run_guarded<R, E, CE, F, C>(action: F, cleanup: C) -> R
where
    F: FnOnce() -> Result<R, E>,
    C: FnOnce() -> Result<(), CE> + 'static,
    E: Error + Send + Sync + 'static,
    CE: Error + Send + Sync + 'static,
{
    Guarded::new(action).cleanup(cleanup).run()
}
