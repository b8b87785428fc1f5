//! A value-or-error container with chainable, context-wrapping combinators.
//!
//! [`Rail<T, E>`](Rail) holds either a success value or a [`ChainError<E>`]:
//! the original failure plus the context layers wrapped around it while it
//! travelled down a chain of steps. Steps may return a plain value, a
//! `Result`, or another `Rail`; each shape has its own combinator, and all of
//! them skip the step once the chain has failed.
//!
//! # Examples
//!
//! ## Chaining steps
//!
//! ```
//! use ok_rail::Rail;
//!
//! fn add_ten(x: i32) -> Result<i32, &'static str> {
//!     Ok(x + 10)
//! }
//!
//! fn divide_by_two(x: i32) -> Result<i32, &'static str> {
//!     if x % 2 != 0 {
//!         return Err("must be even");
//!     }
//!     Ok(x / 2)
//! }
//!
//! let result = Rail::ok(20)
//!     .and_then_outcome(add_ten)
//!     .and_then_outcome_ctx(divide_by_two, "halving");
//!
//! assert_eq!(result.unwrap(), 15);
//! ```
//!
//! ## Inspecting the cause chain
//!
//! ```
//! use ok_rail::{ChainLink, Rail};
//!
//! let err = Rail::<u32, _>::fail("payment declined, amount too high")
//!     .context("charging card")
//!     .context("processing order")
//!     .unwrap_err();
//!
//! assert_eq!(
//!     err.error_chain(),
//!     "processing order -> charging card -> payment declined, amount too high"
//! );
//! assert!(matches!(err.links().last(), Some(ChainLink::Root(_))));
//! ```
//!
//! ## Recovering at the end of the chain
//!
//! ```
//! use ok_rail::{fail, Rail};
//!
//! let rail: Rail<u32, &str> = fail("cache miss");
//! assert_eq!(rail.clone().unwrap_or(5), 5);
//! assert_eq!(rail.unwrap_or_else(|| 6), 6);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Helpers for wrapping errors in context
pub mod context;
/// Conversions between `Result`, `Rail` and `ChainError`
pub mod convert;
/// Macros for building rails and context layers
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The value-or-error container and its combinators
pub mod rail;
/// Traits for context conversion and `Result` lifting
pub mod traits;
/// ChainError, ErrorContext and formatting
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use context::*;
pub use convert::*;
pub use rail::{fail, from_outcome, ok, Rail};
pub use traits::*;
pub use types::{
    error_formatter::{ErrorFormatConfig, ErrorFormatter},
    ChainError, ChainLink, ChainResult, ErrorContext, ErrorVec, LazyContext,
};
