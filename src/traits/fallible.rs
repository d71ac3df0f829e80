//! The fallible-operation capability contract.
//!
//! [`Fallible`] is one generic definition covering every operation shape this
//! crate bridges: zero to two inputs, one output (possibly `()` for
//! side-effect-only shapes, possibly `bool` for predicates), and a declared
//! failure type. Closures get the capability for free through blanket
//! implementations, so a "supplier", "consumer", "function" or "predicate"
//! is just a closure of the corresponding arity.
//!
//! # Examples
//!
//! ```
//! use fallible_bridge::traits::Fallible;
//! use std::num::ParseIntError;
//!
//! let mut parse_and_double = (|text: &str| text.parse::<u32>())
//!     .and_then(|n: u32| Ok::<_, ParseIntError>(n * 2));
//!
//! assert_eq!(parse_and_double.invoke(("21",)).unwrap(), 42);
//! assert!(parse_and_double.invoke(("nope",)).is_err());
//! ```

/// A fallible operation: inputs `Args`, one output, one declared failure type.
///
/// `Args` is the argument tuple — `()`, `(T,)` or `(T, U)` — so arity is a
/// type parameter. Implemented for all `FnMut` closures of those arities
/// that return `Result`.
pub trait Fallible<Args> {
    /// The value produced on success.
    type Output;
    /// The declared failure type.
    type Error;

    /// Invokes the operation once.
    fn invoke(&mut self, args: Args) -> Result<Self::Output, Self::Error>;

    /// Chains a second operation to run on this one's success value.
    ///
    /// `next` is invoked with this operation's output only when this
    /// operation succeeds; on failure, `next` is never invoked and the
    /// failure propagates unchanged. Side-effect-only shapes produce `()`,
    /// so their successor takes `()` and behaves as a follow-up action.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallible_bridge::traits::Fallible;
    ///
    /// let halve = |n: u32| -> Result<u32, &'static str> {
    ///     if n % 2 == 0 { Ok(n / 2) } else { Err("odd") }
    /// };
    /// let mut chain = halve.and_then(|n: u32| Ok(n + 1));
    ///
    /// assert_eq!(chain.invoke((8,)), Ok(5));
    /// assert_eq!(chain.invoke((7,)), Err("odd"));
    /// ```
    #[inline]
    fn and_then<Next>(self, next: Next) -> AndThen<Self, Next>
    where
        Self: Sized,
        Next: Fallible<(Self::Output,), Error = Self::Error>,
    {
        AndThen { first: self, second: next }
    }
}

impl<F, R, E> Fallible<()> for F
where
    F: FnMut() -> Result<R, E>,
{
    type Output = R;
    type Error = E;

    #[inline]
    fn invoke(&mut self, _args: ()) -> Result<R, E> {
        self()
    }
}

impl<F, T, R, E> Fallible<(T,)> for F
where
    F: FnMut(T) -> Result<R, E>,
{
    type Output = R;
    type Error = E;

    #[inline]
    fn invoke(&mut self, (input,): (T,)) -> Result<R, E> {
        self(input)
    }
}

impl<F, T, U, R, E> Fallible<(T, U)> for F
where
    F: FnMut(T, U) -> Result<R, E>,
{
    type Output = R;
    type Error = E;

    #[inline]
    fn invoke(&mut self, (first, second): (T, U)) -> Result<R, E> {
        self(first, second)
    }
}

/// Two fallible operations chained by [`Fallible::and_then`].
#[must_use]
#[derive(Clone)]
pub struct AndThen<First, Second> {
    first: First,
    second: Second,
}

impl<Args, First, Second> Fallible<Args> for AndThen<First, Second>
where
    First: Fallible<Args>,
    Second: Fallible<(First::Output,), Error = First::Error>,
{
    type Output = Second::Output;
    type Error = First::Error;

    #[inline]
    fn invoke(&mut self, args: Args) -> Result<Self::Output, Self::Error> {
        let value = self.first.invoke(args)?;
        self.second.invoke((value,))
    }
}

/// The identity operation: feeds its input through unchanged.
///
/// The neutral element for chaining value-producing operations.
///
/// # Examples
///
/// ```
/// use fallible_bridge::traits::{identity, Fallible};
///
/// let mut chain = (|n: u32| Ok::<_, &'static str>(n * 2)).and_then(identity());
/// assert_eq!(chain.invoke((21,)), Ok(42));
/// ```
#[inline]
pub fn identity<T, E>() -> impl FnMut(T) -> Result<T, E> {
    |value| Ok(value)
}

/// The canonical no-op: absorbs its input and succeeds.
///
/// Serves as the do-nothing instance for every operation shape — a consumer
/// with `T` as its input, a runnable with `T = ()`, or the terminal element
/// of a chain whose result is irrelevant.
///
/// # Examples
///
/// ```
/// use fallible_bridge::traits::{noop, Fallible};
///
/// let mut sink = noop::<u32, std::io::Error>();
/// assert!(sink.invoke((42,)).is_ok());
/// ```
#[inline]
pub fn noop<T, E>() -> impl FnMut(T) -> Result<(), E> {
    |_| Ok(())
}
