//! The value-or-error container and its combinators.
//!
//! A pipeline of fallible steps is written as a chain of calls on [`Rail`]:
//!
//! | Step returns | Combinator |
//! |---|---|
//! | `Rail<U, E>` | [`and_then`](Rail::and_then) / [`and_then_ctx`](Rail::and_then_ctx) |
//! | `Result<U, E>` | [`and_then_outcome`](Rail::and_then_outcome) / [`and_then_outcome_ctx`](Rail::and_then_outcome_ctx) |
//! | `U` | [`map_value`](Rail::map_value) |
//! | `Result<(), E>` from `&T` | [`check`](Rail::check) / [`check_ctx`](Rail::check_ctx) |
//!
//! Once a step fails, later steps are skipped and the error travels to the end
//! of the chain, where [`unwrap_or`](Rail::unwrap_or),
//! [`unwrap_or_else`](Rail::unwrap_or_else) or [`unwrap`](Rail::unwrap) take
//! the rail apart.
//!
//! # Examples
//!
//! ```
//! use ok_rail::Rail;
//!
//! fn validate_positive(x: &i32) -> Result<(), &'static str> {
//!     if *x <= 0 {
//!         return Err("value must be positive");
//!     }
//!     Ok(())
//! }
//!
//! let value = Rail::ok(4)
//!     .map_value(|x| x * x)
//!     .check_ctx(validate_positive, "validating square")
//!     .unwrap_or(0);
//!
//! assert_eq!(value, 16);
//! ```

mod chain;
mod container;
mod iter;

pub use container::{fail, from_outcome, ok, Rail};
pub use iter::{IntoIter, Iter};
