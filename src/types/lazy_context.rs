//! Deferred context generation.
//!
//! A chain step that fails rarely should not pay for formatting its context
//! message on every successful run. [`LazyContext`] holds the closure and only
//! calls it when the layer is actually attached to an error.
//!
//! # Examples
//!
//! ```
//! use ok_rail::{LazyContext, Rail};
//!
//! let order_id = 7;
//! let rail: Rail<u32, &str> = Rail::fail("out of stock")
//!     .context(LazyContext::new(move || format!("reserving order {}", order_id)));
//!
//! assert_eq!(rail.unwrap_err().error_chain(), "reserving order 7 -> out of stock");
//! ```
use crate::traits::IntoErrorContext;
use crate::types::alloc_type::String;
use crate::types::error_context::ErrorContext;

/// A context layer whose text is produced on demand.
///
/// The generator runs at most once, when the layer is converted with
/// [`IntoErrorContext::into_error_context`]. Combinators only do that on the
/// error path, so the success path never calls it.
#[must_use]
#[repr(transparent)]
pub struct LazyContext<F> {
    generator: F,
}

impl<F> LazyContext<F>
where
    F: FnOnce() -> String,
{
    /// Wraps `generator` without calling it.
    #[inline]
    pub fn new(generator: F) -> Self {
        Self { generator }
    }
}

impl<F> IntoErrorContext for LazyContext<F>
where
    F: FnOnce() -> String,
{
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        ErrorContext::new((self.generator)())
    }
}
