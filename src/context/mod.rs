//! Helpers for wrapping errors in context.
//!
//! - [`wrap_context`] is the primitive every chaining combinator uses: it adds
//!   at most one layer to a [`ChainError`] and never looks at the error itself.
//! - [`with_context`] / [`with_context_result`] start a chain from a bare
//!   error or a plain `Result`.
//! - [`context_fn`] builds a reusable closure for `map_err`.
//! - [`format_error_chain`] / [`extract_context`] are the diagnostic side.

use crate::rail::Rail;
use crate::traits::IntoErrorContext;
use crate::types::alloc_type::{String, Vec};
use crate::types::{ChainError, ErrorContext};
use core::fmt::Display;

/// Wraps `error` in `context` when one is given.
///
/// With `None` the error comes back unchanged, so callers can thread an
/// optional context through without branching.
///
/// # Examples
///
/// ```
/// use ok_rail::{wrap_context, ChainError, ErrorContext};
///
/// let err = wrap_context(ChainError::new("timeout"), Some("querying stock"));
/// assert_eq!(err.error_chain(), "querying stock -> timeout");
///
/// let untouched = wrap_context(ChainError::new("timeout"), None::<ErrorContext>);
/// assert!(!untouched.is_wrapped());
/// ```
#[inline]
pub fn wrap_context<E, C>(error: ChainError<E>, context: Option<C>) -> ChainError<E>
where
    C: IntoErrorContext,
{
    match context {
        Some(context) => error.wrap(context),
        None => error,
    }
}

/// Starts a chain from `error` with a single layer.
///
/// # Examples
///
/// ```
/// use ok_rail::{with_context, ErrorContext};
///
/// let err = with_context("io failed", ErrorContext::tag("disk"));
/// assert_eq!(err.depth(), 1);
/// assert_eq!(err.root(), &"io failed");
/// ```
#[inline]
pub fn with_context<E, C>(error: E, context: C) -> ChainError<E>
where
    C: IntoErrorContext,
{
    ChainError::new(error).wrap(context)
}

/// Turns a plain `Result` into a [`Rail`], wrapping any error in `context`.
///
/// The context is only converted on the error path.
///
/// # Examples
///
/// ```
/// use ok_rail::{with_context_result, ErrorContext};
///
/// let rail = with_context_result(Err::<u8, _>("denied"), ErrorContext::tag("auth"));
/// assert_eq!(rail.unwrap_err().error_chain(), "[auth] -> denied");
///
/// let rail = with_context_result(Ok::<u8, &str>(1), "unused");
/// assert_eq!(rail.unwrap(), 1);
/// ```
#[inline]
pub fn with_context_result<T, E, C>(result: Result<T, E>, context: C) -> Rail<T, E>
where
    C: IntoErrorContext,
{
    match result {
        Ok(value) => Rail::Ok(value),
        Err(error) => Rail::Err(with_context(error, context)),
    }
}

/// Returns a closure that wraps any error it is given in a fixed context.
///
/// # Examples
///
/// ```
/// use ok_rail::{context_fn, ErrorContext};
///
/// let network = context_fn(ErrorContext::tag("network"));
/// let err = network("timeout");
/// assert_eq!(err.to_string(), "[network] -> timeout");
/// ```
#[inline]
pub fn context_fn<E, C>(context: C) -> impl Fn(E) -> ChainError<E>
where
    C: IntoErrorContext + Clone,
{
    move |error| with_context(error, context.clone())
}

/// Renders the full chain of `error`, outermost layer first.
///
/// # Examples
///
/// ```
/// use ok_rail::{format_error_chain, ChainError};
///
/// let err = ChainError::new("boom").wrap("step 1").wrap("step 2");
/// assert_eq!(format_error_chain(&err), "step 2 -> step 1 -> boom");
/// ```
#[inline]
pub fn format_error_chain<E>(error: &ChainError<E>) -> String
where
    E: Display,
{
    error.error_chain()
}

/// Copies the context layers of `error`, outermost first.
///
/// # Examples
///
/// ```
/// use ok_rail::{extract_context, ChainError};
///
/// let err = ChainError::new("oops").wrap("first").wrap("second");
/// let layers = extract_context(&err);
/// assert_eq!(layers[0].message(), "second");
/// assert_eq!(layers[1].message(), "first");
/// ```
#[inline]
pub fn extract_context<E>(error: &ChainError<E>) -> Vec<ErrorContext> {
    error.layers().cloned().collect()
}
