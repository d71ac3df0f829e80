//! Extension trait for one-line handle-or-raise on `Result`.
//!
//! # Examples
//!
//! ```
//! use fallible_bridge::traits::ResultExt;
//!
//! fn double(text: &str) -> u32 {
//!     text.parse::<u32>().or_rethrow() * 2
//! }
//!
//! assert_eq!(double("21"), 42);
//! ```

use std::error::Error;

use crate::raise;

/// Adds [`or_rethrow`](ResultExt::or_rethrow) to `Result`.
///
/// The method form of the dispatcher: success values pass through unchanged,
/// failures cross the boundary per the re-raise classification. Useful
/// inside closures handed to APIs with no failure channel.
///
/// # Examples
///
/// ```
/// use fallible_bridge::traits::ResultExt;
///
/// let lengths: Vec<u64> = ["4", "16"]
///     .iter()
///     .map(|text| text.parse::<u64>().or_rethrow())
///     .collect();
///
/// assert_eq!(lengths, [4, 16]);
/// ```
pub trait ResultExt<T> {
    /// Returns the success value, or re-raises the failure. Never swallows.
    fn or_rethrow(self) -> T;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn or_rethrow(self) -> T {
        match self {
            Ok(value) => value,
            Err(failure) => raise::rethrow(failure),
        }
    }
}
