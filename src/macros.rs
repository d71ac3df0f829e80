//! Expression macro for the dispatcher.

/// Unwraps a `Result`, re-raising any failure through the dispatcher.
///
/// Shorthand for matching on a `Result` and calling
/// [`rethrow`](crate::raise::rethrow) in the `Err` arm. Since the dispatcher
/// never returns on failure, the macro is an expression of the success type.
///
/// # Examples
///
/// ```
/// use fallible_bridge::rethrow;
///
/// let value: u32 = rethrow!("42".parse::<u32>());
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! rethrow {
    ($result:expr $(,)?) => {
        match $result {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(failure) => $crate::raise::rethrow(failure),
        }
    };
}
