//! The capability contract every bridged operation satisfies.
//!
//! - [`Fallible`]: one generic shape contract over arity and slot types
//! - [`AndThen`]: success-ordered chaining of two fallible operations
//! - [`ResultExt`]: one-line handle-or-raise on any `Result`
//!
//! # Examples
//!
//! ```
//! use fallible_bridge::traits::{Fallible, ResultExt};
//!
//! let mut add = |a: u32, b: u32| Ok::<_, std::io::Error>(a + b);
//! assert_eq!(add.invoke((40, 2)).unwrap(), 42);
//!
//! let value: u32 = "42".parse::<u32>().or_rethrow();
//! assert_eq!(value, 42);
//! ```

pub mod fallible;
pub mod result_ext;

pub use fallible::{identity, noop, AndThen, Fallible};
pub use result_ext::ResultExt;
