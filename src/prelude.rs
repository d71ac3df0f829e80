//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use fallible_bridge::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Dispatcher**: [`rethrow`], [`rethrow_boxed`], [`capture`], the
//!   [`rethrow!`](macro@crate::rethrow) macro
//! - **Types**: [`Unchecked`], [`UncheckedKind`], [`Captured`],
//!   [`BoxedFailure`]
//! - **Traits**: [`Fallible`], [`ResultExt`]
//! - **Execution**: [`run_guarded`], [`Guarded`], the [`adapt`] and
//!   [`invoke`] modules
//!
//! # Examples
//!
//! ```
//! use fallible_bridge::prelude::*;
//!
//! let total: u32 = ["12", "30"]
//!     .iter()
//!     .map(adapt::function(|text: &&str| text.parse::<u32>()))
//!     .sum();
//!
//! assert_eq!(total, 42);
//! ```

// Both the dispatcher entry point and the macro of the same name.
pub use crate::rethrow;

// Dispatcher
pub use crate::raise::{capture, rethrow_boxed, rethrow_captured};

// Core types
pub use crate::types::{BoxedFailure, Captured, Unchecked, UncheckedKind};

// Traits
pub use crate::traits::{Fallible, ResultExt};

// Execution
pub use crate::guard::{run_guarded, Guarded};
pub use crate::{adapt, invoke};
