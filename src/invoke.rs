//! Immediate-invocation conveniences.
//!
//! Each function calls a fallible operation once, right now: success values
//! come back unchanged, failures cross the boundary through the dispatcher.
//! These are the call-site counterparts of the deferred constructors in
//! [`crate::adapt`].
//!
//! # Examples
//!
//! ```
//! use fallible_bridge::invoke;
//!
//! let value = invoke::apply(|text: &str| text.parse::<u32>(), "42");
//! assert_eq!(value, 42);
//! ```

use std::error::Error;

use crate::raise;

/// Invokes a zero-arg producer, returning its value.
pub fn get<R, E, F>(operation: F) -> R
where
    F: FnOnce() -> Result<R, E>,
    E: Error + Send + Sync + 'static,
{
    match operation() {
        Ok(value) => value,
        Err(failure) => raise::rethrow(failure),
    }
}

/// Invokes a zero-arg action.
pub fn run<E, F>(operation: F)
where
    F: FnOnce() -> Result<(), E>,
    E: Error + Send + Sync + 'static,
{
    match operation() {
        Ok(()) => {}
        Err(failure) => raise::rethrow(failure),
    }
}

/// Invokes a one-arg operation, returning its value.
pub fn apply<T, R, E, F>(operation: F, input: T) -> R
where
    F: FnOnce(T) -> Result<R, E>,
    E: Error + Send + Sync + 'static,
{
    match operation(input) {
        Ok(value) => value,
        Err(failure) => raise::rethrow(failure),
    }
}

/// Invokes a two-arg operation, returning its value.
pub fn apply2<T, U, R, E, F>(operation: F, first: T, second: U) -> R
where
    F: FnOnce(T, U) -> Result<R, E>,
    E: Error + Send + Sync + 'static,
{
    match operation(first, second) {
        Ok(value) => value,
        Err(failure) => raise::rethrow(failure),
    }
}

/// Invokes a one-arg consumer.
pub fn accept<T, E, F>(operation: F, input: T)
where
    F: FnOnce(T) -> Result<(), E>,
    E: Error + Send + Sync + 'static,
{
    match operation(input) {
        Ok(()) => {}
        Err(failure) => raise::rethrow(failure),
    }
}

/// Invokes a two-arg consumer.
pub fn accept2<T, U, E, F>(operation: F, first: T, second: U)
where
    F: FnOnce(T, U) -> Result<(), E>,
    E: Error + Send + Sync + 'static,
{
    match operation(first, second) {
        Ok(()) => {}
        Err(failure) => raise::rethrow(failure),
    }
}

/// Invokes a predicate on a subject, returning its verdict.
pub fn test<T, E, F>(operation: F, subject: &T) -> bool
where
    F: FnOnce(&T) -> Result<bool, E>,
    E: Error + Send + Sync + 'static,
{
    match operation(subject) {
        Ok(verdict) => verdict,
        Err(failure) => raise::rethrow(failure),
    }
}
