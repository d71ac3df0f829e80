//! The re-raise dispatcher.
//!
//! A fallible operation reports failure through its `Result`; many call sites
//! (iterator combinators, callbacks, visitor hooks) offer no failure channel
//! at all. The dispatcher is the single decision procedure that re-presents a
//! captured failure on the unchecked channel — a panic — while preserving the
//! original failure's identity and cause chain.
//!
//! Classification, in priority order:
//!
//! 1. An absent failure returns normally ([`rethrow_captured`] with `None`).
//! 2. A failure that is already unchecked — an in-flight panic payload, or an
//!    [`Unchecked`] wrapper being re-raised — propagates unchanged, never
//!    re-wrapped.
//! 3. A fatal failure (per the installed fatal check) propagates unchanged:
//!    the panic payload is the boxed original, with no wrapper around it.
//! 4. An [`std::io::Error`] is raised as an [`Unchecked`] of kind
//!    [`UncheckedKind::Io`], cause = the original object.
//! 5. Every other failure is raised as an [`Unchecked`] of kind
//!    [`UncheckedKind::Undeclared`], cause = the original object.
//!
//! Nothing is ever swallowed: with a non-absent input, every entry point
//! diverges. The `-> !` return type lets callers use the dispatcher in
//! expression position:
//!
//! ```
//! use fallible_bridge::raise;
//!
//! fn parse_or_panic(text: &str) -> u32 {
//!     text.parse().unwrap_or_else(|failure| raise::rethrow(failure))
//! }
//!
//! assert_eq!(parse_or_panic("42"), 42);
//! ```
//!
//! # Catching
//!
//! [`capture`] is the inverse boundary: it runs a closure and hands back any
//! unchecked failure as a [`Captured`], ready for inspection or re-raising.
//!
//! ```
//! use fallible_bridge::{raise, Unchecked};
//!
//! let caught = raise::capture(|| {
//!     "nope".parse::<u32>().unwrap_or_else(|failure| raise::rethrow(failure))
//! });
//!
//! let failure = caught.unwrap_err().into_failure();
//! let wrapped = failure.downcast_ref::<Unchecked>().unwrap();
//! assert!(wrapped.cause().is::<std::num::ParseIntError>());
//! ```

use std::collections::TryReserveError;
use std::error::Error;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;

use crate::types::{BoxedFailure, Captured, Unchecked, UncheckedKind};

/// Decides whether a failure is fatal and must cross the boundary untouched.
pub type FatalCheck = fn(&(dyn Error + 'static)) -> bool;

static FATAL_CHECK: OnceLock<FatalCheck> = OnceLock::new();

/// Default fatal boundary: resource exhaustion.
///
/// Treats [`TryReserveError`] and I/O failures of kind
/// [`io::ErrorKind::OutOfMemory`] as fatal; everything else is recoverable
/// and subject to wrapping.
fn default_fatal_check(failure: &(dyn Error + 'static)) -> bool {
    if failure.is::<TryReserveError>() {
        return true;
    }
    failure
        .downcast_ref::<io::Error>()
        .is_some_and(|io| io.kind() == io::ErrorKind::OutOfMemory)
}

/// Installs a process-wide fatal check, replacing the default boundary.
///
/// Which failures count as unrecoverable is host-specific, so the boundary is
/// a configurable predicate rather than a fixed list. The check can be
/// installed once, before any raising happens (the same contract as
/// [`std::panic::set_hook`]); returns `false` if a check was already
/// installed.
///
/// The default boundary treats resource exhaustion as fatal
/// ([`TryReserveError`], I/O failures of kind [`io::ErrorKind::OutOfMemory`]).
pub fn set_fatal_check(check: FatalCheck) -> bool {
    FATAL_CHECK.set(check).is_ok()
}

fn is_fatal(failure: &(dyn Error + Send + Sync + 'static)) -> bool {
    let check = FATAL_CHECK.get().copied().unwrap_or(default_fatal_check);
    check(failure)
}

/// How a classified failure crosses the boundary.
enum Disposition {
    /// Raise the original failure object untouched.
    Fatal(BoxedFailure),
    /// Raise this wrapper. An already-built wrapper re-raises as itself.
    Unchecked(Unchecked),
}

fn classify(failure: BoxedFailure) -> Disposition {
    let failure = match failure.downcast::<Unchecked>() {
        Ok(unchecked) => return Disposition::Unchecked(*unchecked),
        Err(failure) => failure,
    };
    if is_fatal(failure.as_ref()) {
        return Disposition::Fatal(failure);
    }
    let kind = if failure.is::<io::Error>() {
        UncheckedKind::Io
    } else {
        UncheckedKind::Undeclared
    };
    Disposition::Unchecked(Unchecked::from_boxed(kind, failure))
}

fn raise(disposition: Disposition) -> ! {
    match disposition {
        Disposition::Fatal(failure) => panic::panic_any(failure),
        Disposition::Unchecked(unchecked) => unchecked.raise(),
    }
}

/// Re-raises a typed failure as an unchecked failure. Never returns.
///
/// Fatal failures are delivered with the boxed original as the panic payload
/// (downcastable to [`BoxedFailure`]); everything else is delivered as an
/// [`Unchecked`] payload carrying the original as its cause.
///
/// # Examples
///
/// ```
/// use fallible_bridge::{raise, Unchecked, UncheckedKind};
/// use std::io;
///
/// let caught = raise::capture(|| -> u32 {
///     raise::rethrow(io::Error::new(io::ErrorKind::NotFound, "missing"))
/// });
///
/// let failure = caught.unwrap_err().into_failure();
/// let wrapped = failure.downcast_ref::<Unchecked>().unwrap();
/// assert_eq!(wrapped.kind(), UncheckedKind::Io);
/// ```
pub fn rethrow<E>(failure: E) -> !
where
    E: Error + Send + Sync + 'static,
{
    rethrow_boxed(Box::new(failure))
}

/// Re-raises an already-boxed failure without re-boxing it. Never returns.
///
/// The cause carried across the boundary is the exact allocation passed in,
/// so the original failure's identity survives the raise.
pub fn rethrow_boxed(failure: BoxedFailure) -> ! {
    raise(classify(failure))
}

/// Re-raises a captured failure, or returns normally when there is none.
///
/// The only input the dispatcher answers with a normal return is `None`;
/// control never proceeds past this call with a `Some` input.
///
/// # Examples
///
/// ```
/// use fallible_bridge::raise;
///
/// raise::rethrow_captured(None); // no failure, no effect
/// ```
pub fn rethrow_captured(failure: Option<Captured>) {
    if let Some(failure) = failure {
        raise_captured(failure)
    }
}

pub(crate) fn raise_captured(failure: Captured) -> ! {
    match failure {
        Captured::Panic(payload) => panic::resume_unwind(payload),
        Captured::Error(failure) => rethrow_boxed(failure),
    }
}

/// Re-raises a primary failure with secondary failures attached as suppressed.
///
/// Pass-through primaries (fatal failures, foreign panic payloads) have no
/// suppressed list to attach to; their secondaries are reported through
/// `tracing` when the feature is enabled, and dropped from propagation.
pub(crate) fn raise_suppressing(primary: Captured, suppressed: Vec<BoxedFailure>) -> ! {
    match primary {
        Captured::Panic(mut payload) => {
            if let Some(unchecked) = payload.downcast_mut::<Unchecked>() {
                for failure in suppressed {
                    unchecked.push_suppressed(failure);
                }
            } else {
                discard_suppressed(suppressed);
            }
            panic::resume_unwind(payload)
        }
        Captured::Error(failure) => match classify(failure) {
            Disposition::Unchecked(mut unchecked) => {
                for failure in suppressed {
                    unchecked.push_suppressed(failure);
                }
                unchecked.raise()
            }
            Disposition::Fatal(failure) => {
                discard_suppressed(suppressed);
                panic::panic_any(failure)
            }
        },
    }
}

fn discard_suppressed(suppressed: Vec<BoxedFailure>) {
    #[cfg(feature = "tracing")]
    for failure in &suppressed {
        tracing::warn!(%failure, "dropping cleanup failure; primary failure propagates untouched");
    }
    let _ = suppressed;
}

/// Runs a closure, catching any unchecked failure it raises.
///
/// The inverse boundary of [`rethrow`]: the caught failure comes back as a
/// [`Captured`], with payload identity intact, ready to be inspected or
/// re-raised with [`Captured::raise`].
///
/// # Examples
///
/// ```
/// use fallible_bridge::raise;
///
/// assert_eq!(raise::capture(|| 2 + 2).unwrap(), 4);
/// ```
pub fn capture<R>(operation: impl FnOnce() -> R) -> Result<R, Captured> {
    panic::catch_unwind(AssertUnwindSafe(operation)).map_err(Captured::Panic)
}
