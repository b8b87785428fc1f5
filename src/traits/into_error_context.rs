//! Conversion of caller values into context layers.
//!
//! Every combinator that accepts a context takes any `C: IntoErrorContext`, so
//! string literals, owned strings, prepared [`ErrorContext`] values and
//! [`LazyContext`](crate::LazyContext) generators can all be passed directly.
//!
//! # Examples
//!
//! ```
//! use ok_rail::{traits::IntoErrorContext, ErrorContext};
//!
//! assert_eq!("validating input".into_error_context().message(), "validating input");
//! assert_eq!(String::from("owned").into_error_context().message(), "owned");
//! assert_eq!(ErrorContext::tag("db").into_error_context().message(), "[db]");
//! ```
use crate::types::alloc_type::{Cow, String};
use crate::types::error_context::ErrorContext;

/// Converts a value into one [`ErrorContext`] layer.
///
/// For a type that already implements `Display`, the
/// [`impl_error_context!`](crate::impl_error_context) macro writes the
/// implementation. Otherwise implement it by hand:
///
/// ```
/// use ok_rail::{traits::IntoErrorContext, ErrorContext};
///
/// struct OrderRef { id: u64 }
///
/// impl IntoErrorContext for OrderRef {
///     fn into_error_context(self) -> ErrorContext {
///         ErrorContext::metadata("order_id", self.id.to_string())
///     }
/// }
///
/// assert_eq!(OrderRef { id: 9 }.into_error_context().message(), "order_id=9");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as error context",
    label = "this type does not implement `IntoErrorContext`",
    note = "implement `IntoErrorContext` manually or use `impl_error_context!({Self})`"
)]
pub trait IntoErrorContext {
    fn into_error_context(self) -> ErrorContext;
}

impl IntoErrorContext for String {
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        ErrorContext::new(self)
    }
}

impl IntoErrorContext for &'static str {
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        ErrorContext::new(self)
    }
}

impl IntoErrorContext for Cow<'static, str> {
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        ErrorContext::new(self)
    }
}

impl IntoErrorContext for ErrorContext {
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        self
    }
}
