//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use ok_rail::prelude::*;
//!
//! fn parse_price(raw: &str) -> Result<f64, std::num::ParseFloatError> {
//!     raw.parse()
//! }
//!
//! let total = parse_price("300")
//!     .ctx("reading price")
//!     .map_value(|price| price * 1.075)
//!     .unwrap_or(0.0);
//! assert!((total - 322.5).abs() < 1e-9);
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`context!`], [`rail!`]
//! - **Types**: [`Rail`], [`ChainError`], [`ErrorContext`], [`LazyContext`]
//! - **Functions**: [`ok`], [`fail`], [`from_outcome`], [`wrap_context`]
//! - **Traits**: [`ResultExt`], [`IntoErrorContext`]

// Macros
pub use crate::{context, rail};

// Core types
pub use crate::rail::{fail, from_outcome, ok, Rail};
pub use crate::types::{ChainError, ChainResult, ErrorContext, LazyContext};

pub use crate::context::wrap_context;

// Traits
pub use crate::traits::{IntoErrorContext, ResultExt};
