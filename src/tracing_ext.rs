//! Tracing integration.
//!
//! The rail itself never logs. With the `tracing` feature enabled, this module
//! lets a chain record where it failed: span names become context layers, and
//! [`RailSpanExt::trace_err`] emits one event for a failed rail.
//!
//! ```toml
//! [dependencies]
//! ok-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::rail::Rail;
use crate::types::alloc_type::format;
use crate::types::{ChainError, ErrorContext};

/// Span-aware helpers for [`Rail`].
pub trait RailSpanExt<T, E>: Sized {
    /// Wraps an error, if any, in the name of the current span.
    ///
    /// ```
    /// use ok_rail::{tracing_ext::RailSpanExt, Rail};
    ///
    /// let err = Rail::<(), _>::fail("boom").with_current_span().unwrap_err();
    /// assert!(err.error_chain().contains("in span"));
    /// ```
    fn with_current_span(self) -> Self;

    /// Wraps an error, if any, in the name of `span`.
    fn with_span(self, span: &Span) -> Self;

    /// Emits a `tracing::error!` event with the rendered chain when the rail
    /// has failed, then returns it unchanged.
    fn trace_err(self) -> Self
    where
        E: core::fmt::Display;
}

impl<T, E> RailSpanExt<T, E> for Rail<T, E> {
    fn with_current_span(self) -> Self {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Self {
        match self {
            Rail::Ok(value) => Rail::Ok(value),
            Rail::Err(error) => Rail::Err(error.wrap(span_to_context(span))),
        }
    }

    fn trace_err(self) -> Self
    where
        E: core::fmt::Display,
    {
        if let Rail::Err(error) = &self {
            tracing::error!(
                depth = error.depth(),
                chain = %error,
                "rail ended in error"
            );
        }
        self
    }
}

/// Starts a chain from `error`, wrapped in the current span's name.
///
/// ```
/// use ok_rail::tracing_ext::instrument_error;
///
/// let err = instrument_error("something went wrong");
/// assert!(err.error_chain().ends_with("something went wrong"));
/// ```
pub fn instrument_error<E>(error: E) -> ChainError<E> {
    ChainError::new(error).wrap(span_to_context(&Span::current()))
}

/// Disabled spans carry no metadata and are reported as `unknown`.
fn span_to_context(span: &Span) -> ErrorContext {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    ErrorContext::new(format!("in span '{}'", name))
}
