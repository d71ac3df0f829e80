//! Failure values exchanged across the bridge.
//!
//! # Examples
//!
//! ```
//! use fallible_bridge::{Unchecked, UncheckedKind};
//! use std::io;
//!
//! let wrapped = Unchecked::io(io::Error::new(io::ErrorKind::NotFound, "missing"));
//! assert_eq!(wrapped.kind(), UncheckedKind::Io);
//! ```

use smallvec::SmallVec;
use std::any::Any;
use std::error::Error;

pub mod captured;
pub mod unchecked;

pub use captured::{Captured, PanicFailure};
pub use unchecked::{Unchecked, UncheckedKind};

/// Boxed, type-erased failure owned by a wrapper or a suppressed list.
pub type BoxedFailure = Box<dyn Error + Send + Sync + 'static>;

/// Payload of an unchecked failure already in flight.
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// SmallVec-backed list of suppressed failures.
///
/// Uses inline storage for one element; guarded execution rarely records
/// more than a single cleanup failure.
pub type SuppressedVec = SmallVec<[BoxedFailure; 1]>;
