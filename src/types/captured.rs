//! Failures caught at an infallible boundary, before re-raising.

use std::error::Error;
use std::fmt;

use crate::types::{BoxedFailure, PanicPayload, Unchecked};

/// A failure caught at an infallible boundary.
///
/// Two sources exist: a fallible operation returned its typed failure
/// (`Error`), or an unchecked failure was already in flight and was caught
/// mid-unwind (`Panic`). The dispatcher treats the two differently — an
/// in-flight failure is resumed with its payload untouched, while a typed
/// failure is classified and possibly wrapped.
///
/// # Examples
///
/// ```
/// use fallible_bridge::{capture, Captured};
///
/// let caught = capture(|| "not a number".parse::<u32>().unwrap_or_else(|e| {
///     fallible_bridge::rethrow(e)
/// }));
/// assert!(matches!(caught, Err(Captured::Panic(_))));
/// ```
pub enum Captured {
    /// A typed failure returned by a fallible operation.
    Error(BoxedFailure),
    /// An unchecked failure already in flight.
    Panic(PanicPayload),
}

impl Captured {
    /// Captures a typed failure.
    #[inline]
    pub fn error<E>(failure: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Error(Box::new(failure))
    }

    /// Re-raises this failure through the dispatcher.
    #[inline]
    pub fn raise(self) -> ! {
        crate::raise::raise_captured(self)
    }

    /// Returns a best-effort view of this failure as a boxed error.
    ///
    /// A typed failure is returned as-is. An in-flight payload that carries an
    /// [`Unchecked`] yields that exact wrapper; any other payload becomes a
    /// [`PanicFailure`] holding the payload's message, since an arbitrary
    /// panic payload is not an error value.
    pub fn into_failure(self) -> BoxedFailure {
        match self {
            Self::Error(failure) => failure,
            Self::Panic(payload) => match payload.downcast::<Unchecked>() {
                Ok(unchecked) => unchecked,
                Err(payload) => Box::new(PanicFailure::from_payload(&payload)),
            },
        }
    }
}

impl fmt::Debug for Captured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(failure) => f.debug_tuple("Error").field(failure).finish(),
            Self::Panic(_) => f.debug_tuple("Panic").field(&"<payload>").finish(),
        }
    }
}

/// Stand-in error for a panic payload that carries no error value.
///
/// Holds the payload's string message when one exists. Produced by
/// [`Captured::into_failure`] and by guarded execution when a cleanup action
/// panics with a plain message while a primary failure is propagating.
#[derive(Debug)]
pub struct PanicFailure {
    message: String,
}

impl PanicFailure {
    pub(crate) fn from_payload(payload: &PanicPayload) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            (*text).to_owned()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "opaque panic payload".to_owned()
        };
        Self { message }
    }

    /// Returns the panic message, if the payload carried one.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PanicFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panic: {}", self.message)
    }
}

impl Error for PanicFailure {}
