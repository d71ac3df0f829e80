//! Wrapper raised when a checked failure crosses an infallible boundary.
//!
//! [`Unchecked`] exists solely to carry an original failure across a calling
//! convention that has no typed failure channel. The original value is owned
//! as the wrapper's cause and is retrievable through [`std::error::Error::source`];
//! it is never copied, re-rendered, or replaced.
//!
//! # Examples
//!
//! ```
//! use fallible_bridge::{Unchecked, UncheckedKind};
//! use std::error::Error;
//! use std::io;
//!
//! let wrapped = Unchecked::io(io::Error::new(io::ErrorKind::NotFound, "missing"));
//!
//! assert_eq!(wrapped.kind(), UncheckedKind::Io);
//! assert!(wrapped.source().is_some());
//! assert!(wrapped.cause().is::<io::Error>());
//! ```

use std::error::Error;
use std::fmt;
use std::panic;

use crate::types::{BoxedFailure, SuppressedVec};

/// Which wrapper the dispatcher chose for a checked failure.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UncheckedKind {
    /// The cause is an I/O failure (`std::io::Error`).
    Io,
    /// The cause is any other failure the boundary could not declare.
    Undeclared,
}

/// An unchecked failure carrying the original checked failure as its cause.
///
/// Raised by the dispatcher as a panic payload. The cause is the exact
/// original failure object; a suppressed list records secondary failures
/// collected by guarded execution.
///
/// # Examples
///
/// ```
/// use fallible_bridge::Unchecked;
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct ConfigMissing;
///
/// impl fmt::Display for ConfigMissing {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "configuration missing")
///     }
/// }
///
/// impl std::error::Error for ConfigMissing {}
///
/// let wrapped = Unchecked::undeclared(ConfigMissing);
/// assert!(wrapped.cause().is::<ConfigMissing>());
/// assert_eq!(wrapped.to_string(), "undeclared failure: configuration missing");
/// ```
#[derive(Debug)]
pub struct Unchecked {
    kind: UncheckedKind,
    cause: BoxedFailure,
    suppressed: SuppressedVec,
}

impl Unchecked {
    /// Wraps an I/O failure.
    #[inline]
    pub fn io<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_boxed(UncheckedKind::Io, Box::new(cause))
    }

    /// Wraps any other checked failure.
    #[inline]
    pub fn undeclared<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_boxed(UncheckedKind::Undeclared, Box::new(cause))
    }

    /// Wraps an already-boxed failure without re-boxing it.
    #[inline]
    pub fn from_boxed(kind: UncheckedKind, cause: BoxedFailure) -> Self {
        Self { kind, cause, suppressed: SuppressedVec::new() }
    }

    /// Returns which wrapper kind the dispatcher chose.
    #[inline]
    pub fn kind(&self) -> UncheckedKind {
        self.kind
    }

    /// Returns `true` if the cause is an I/O failure.
    #[inline]
    pub fn is_io(&self) -> bool {
        self.kind == UncheckedKind::Io
    }

    /// Returns the original failure this wrapper carries.
    #[inline]
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    /// Consumes the wrapper, returning the original failure.
    ///
    /// Any suppressed failures recorded on the wrapper are dropped.
    #[inline]
    pub fn into_cause(self) -> BoxedFailure {
        self.cause
    }

    /// Returns the secondary failures recorded on this wrapper, oldest first.
    #[inline]
    pub fn suppressed(&self) -> &[BoxedFailure] {
        &self.suppressed
    }

    /// Records a secondary failure on this wrapper.
    ///
    /// Used by guarded execution when a cleanup action fails while a primary
    /// failure is already propagating. The primary cause is untouched.
    #[inline]
    pub fn push_suppressed(&mut self, failure: BoxedFailure) {
        self.suppressed.push(failure);
    }

    /// Raises this wrapper as an unchecked failure.
    #[inline]
    pub fn raise(self) -> ! {
        panic::panic_any(self)
    }
}

impl fmt::Display for Unchecked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            UncheckedKind::Io => write!(f, "unchecked I/O failure: {}", self.cause)?,
            UncheckedKind::Undeclared => write!(f, "undeclared failure: {}", self.cause)?,
        }
        if !self.suppressed.is_empty() {
            write!(f, " (+{} suppressed)", self.suppressed.len())?;
        }
        Ok(())
    }
}

impl Error for Unchecked {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_ref())
    }
}
