//! Bridge fallible operations across call sites that cannot fail.
//!
//! Plenty of calling conventions — iterator combinators, callbacks, visitor
//! hooks — offer no typed failure channel, yet the operations plugged into
//! them still fail. This crate re-presents such failures on the unchecked
//! channel (a panic) without losing anything: the original failure object
//! crosses the boundary intact, retrievable through the standard
//! [`Error::source`](std::error::Error::source) chain.
//!
//! Three pieces:
//!
//! - the **dispatcher** ([`raise`]): the one decision procedure that
//!   classifies a captured failure and re-raises it — unchanged when it is
//!   already unchecked or fatal, wrapped in [`Unchecked`] otherwise
//! - **adapters** ([`adapt`], [`invoke`], [`traits::ResultExt`]): wrap a
//!   `Result`-returning operation of any shape into the matching infallible
//!   calling convention
//! - **guarded execution** ([`guard`]): a primary action plus cleanup
//!   actions that always run, with failure aggregation instead of
//!   replacement
//!
//! # Examples
//!
//! ## Fallible operations in an infallible pipeline
//!
//! ```
//! use fallible_bridge::adapt;
//!
//! let parsed: Vec<u32> = ["1", "2", "3"]
//!     .iter()
//!     .map(adapt::function(|text: &&str| text.parse::<u32>()))
//!     .collect();
//!
//! assert_eq!(parsed, [1, 2, 3]);
//! ```
//!
//! ## The original failure survives the boundary
//!
//! ```
//! use fallible_bridge::{capture, Unchecked};
//! use fallible_bridge::traits::ResultExt;
//!
//! let caught = capture(|| "forty-two".parse::<u32>().or_rethrow()).unwrap_err();
//!
//! let failure = caught.into_failure();
//! let wrapped = failure.downcast_ref::<Unchecked>().unwrap();
//! assert!(wrapped.cause().is::<std::num::ParseIntError>());
//! ```
//!
//! ## Cleanup that always runs
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

/// Adapters from fallible operations to infallible calling conventions
pub mod adapt;
/// Guarded two-phase execution with failure aggregation
pub mod guard;
/// Immediate-invocation conveniences
pub mod invoke;
/// Expression macros for the dispatcher
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The re-raise dispatcher and its fatal boundary
pub mod raise;
/// The capability contract every bridged operation satisfies
pub mod traits;
/// Failure values exchanged across the bridge
pub mod types;

// Re-export the working surface at the root; prelude narrows it further.
pub use guard::{run_guarded, Guarded};
pub use raise::{capture, rethrow, rethrow_boxed, rethrow_captured, set_fatal_check, FatalCheck};
pub use traits::{identity, noop, AndThen, Fallible, ResultExt};
pub use types::{
    BoxedFailure, Captured, PanicFailure, PanicPayload, SuppressedVec, Unchecked, UncheckedKind,
};
