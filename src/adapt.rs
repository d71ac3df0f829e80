//! Adapters from fallible operations to infallible calling conventions.
//!
//! Each adapter takes a `Result`-returning operation and hands back a closure
//! of the same arity minus the failure channel: successes pass through
//! unchanged, failures go to the dispatcher and never return. Adapters are
//! stateless beyond the one closure they produce and do not invoke the
//! operation — construction is deferred, invocation happens at the call site.
//!
//! [`adapt`] is the generic core over [`Fallible`]; the per-shape
//! constructors are its instances, named for the calling convention they
//! produce.
//!
//! # Examples
//!
//! ```
//! use fallible_bridge::adapt;
//!
//! let doubled: Vec<u32> = ["1", "2", "3"]
//!     .iter()
//!     .map(adapt::function(|text: &&str| text.parse::<u32>().map(|n| n * 2)))
//!     .collect();
//!
//! assert_eq!(doubled, [2, 4, 6]);
//! ```

use std::error::Error;

use crate::raise;
use crate::traits::Fallible;

/// Wraps any fallible operation into an infallible one over the same
/// argument tuple.
///
/// The returned closure passes success values through unchanged and hands
/// failures to the dispatcher, which never returns.
///
/// # Examples
///
/// ```
/// use fallible_bridge::adapt;
///
/// let mut add = adapt::adapt(|a: u32, b: u32| Ok::<_, std::io::Error>(a + b));
/// assert_eq!(add((40, 2)), 42);
/// ```
pub fn adapt<Args, Op>(mut operation: Op) -> impl FnMut(Args) -> Op::Output
where
    Op: Fallible<Args>,
    Op::Error: Error + Send + Sync + 'static,
{
    move |args| match operation.invoke(args) {
        Ok(value) => value,
        Err(failure) => raise::rethrow(failure),
    }
}

/// Adapts a fallible zero-arg producer into a plain supplier, deferred.
pub fn supplier<R, E, F>(operation: F) -> impl FnMut() -> R
where
    F: FnMut() -> Result<R, E>,
    E: Error + Send + Sync + 'static,
{
    let mut call = adapt(operation);
    move || call(())
}

/// Adapts a fallible zero-arg action into a plain runnable, deferred.
pub fn runnable<E, F>(operation: F) -> impl FnMut()
where
    F: FnMut() -> Result<(), E>,
    E: Error + Send + Sync + 'static,
{
    let mut call = adapt(operation);
    move || call(())
}

/// Adapts a fallible one-arg operation into a plain function.
pub fn function<T, R, E, F>(operation: F) -> impl FnMut(T) -> R
where
    F: FnMut(T) -> Result<R, E>,
    E: Error + Send + Sync + 'static,
{
    let mut call = adapt(operation);
    move |input| call((input,))
}

/// Adapts a fallible two-arg operation into a plain function.
pub fn bi_function<T, U, R, E, F>(operation: F) -> impl FnMut(T, U) -> R
where
    F: FnMut(T, U) -> Result<R, E>,
    E: Error + Send + Sync + 'static,
{
    let mut call = adapt(operation);
    move |first, second| call((first, second))
}

/// Adapts a fallible consumer into a plain one.
pub fn consumer<T, E, F>(operation: F) -> impl FnMut(T)
where
    F: FnMut(T) -> Result<(), E>,
    E: Error + Send + Sync + 'static,
{
    let mut call = adapt(operation);
    move |input| call((input,))
}

/// Adapts a fallible two-arg consumer into a plain one.
pub fn bi_consumer<T, U, E, F>(operation: F) -> impl FnMut(T, U)
where
    F: FnMut(T, U) -> Result<(), E>,
    E: Error + Send + Sync + 'static,
{
    let mut call = adapt(operation);
    move |first, second| call((first, second))
}

/// Adapts a fallible predicate into a plain one.
///
/// Takes its subject by reference, the calling convention of iterator
/// combinators such as [`Iterator::filter`].
///
/// # Examples
///
/// ```
/// use fallible_bridge::adapt;
///
/// let small: Vec<u32> = [1u32, 2, 3, 4]
///     .into_iter()
///     .filter(adapt::predicate(|n: &u32| Ok::<_, std::io::Error>(*n < 3)))
///     .collect();
///
/// assert_eq!(small, [1, 2]);
/// ```
pub fn predicate<T, E, F>(mut operation: F) -> impl FnMut(&T) -> bool
where
    F: FnMut(&T) -> Result<bool, E>,
    E: Error + Send + Sync + 'static,
{
    move |input| match operation(input) {
        Ok(verdict) => verdict,
        Err(failure) => raise::rethrow(failure),
    }
}

/// Adapts a fallible two-subject predicate into a plain one.
pub fn bi_predicate<T, U, E, F>(mut operation: F) -> impl FnMut(&T, &U) -> bool
where
    F: FnMut(&T, &U) -> Result<bool, E>,
    E: Error + Send + Sync + 'static,
{
    move |first, second| match operation(first, second) {
        Ok(verdict) => verdict,
        Err(failure) => raise::rethrow(failure),
    }
}
