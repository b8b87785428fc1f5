//! Macros for building rails and context layers.
//!
//! - [`macro@crate::rail`] - lifts a `Result`-producing expression or block
//!   into a [`Rail`](crate::Rail).
//! - [`macro@crate::context`] - a [`LazyContext`](crate::LazyContext) with
//!   `format!` arguments, formatted only if a failure needs it.
//! - [`macro@crate::impl_error_context`] - implements
//!   [`IntoErrorContext`](crate::traits::IntoErrorContext) via `Display`.
//!
//! # Examples
//!
//! ```
//! use ok_rail::{context, rail};
//!
//! let order_id = 10;
//! let rail = rail!("12".parse::<u32>())
//!     .context(context!("reading quantity for order {}", order_id));
//!
//! assert_eq!(rail.unwrap(), 12);
//! ```

/// Lifts a `Result`-producing expression or block into a [`Rail`](crate::Rail).
///
/// # Examples
///
/// ```
/// use ok_rail::rail;
///
/// let parsed = rail!("7".parse::<i32>());
/// assert_eq!(parsed.unwrap(), 7);
///
/// let failed = rail!({
///     let raw = "seven";
///     raw.parse::<i32>()
/// });
/// assert!(failed.is_err());
/// ```
#[macro_export]
macro_rules! rail {
    ($expr:expr $(,)?) => {
        $crate::Rail::from_result($expr)
    };
}

/// Creates a lazily formatted context layer.
///
/// Accepts the same arguments as `format!`. The message is only formatted
/// when the layer is attached to a failure.
///
/// # Examples
///
/// ```
/// use ok_rail::{context, Rail};
///
/// let user_id = 42;
/// let err = Rail::<(), _>::fail("auth failed")
///     .context(context!("user_id: {}", user_id))
///     .unwrap_err();
///
/// assert_eq!(err.error_chain(), "user_id: 42 -> auth failed");
/// ```
#[macro_export]
macro_rules! context {
    ($($arg:tt)*) => {
        $crate::types::LazyContext::new(move || format!($($arg)*))
    };
}

/// Implements `IntoErrorContext` for a type through its `Display` output.
///
/// # Examples
///
/// ```
/// use ok_rail::{impl_error_context, traits::IntoErrorContext};
/// use std::fmt;
///
/// struct Sku(u32);
///
/// impl fmt::Display for Sku {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "sku {}", self.0)
///     }
/// }
///
/// impl_error_context!(Sku);
///
/// assert_eq!(Sku(404).into_error_context().to_string(), "sku 404");
/// ```
#[macro_export]
macro_rules! impl_error_context {
    ($type:ty) => {
        impl $crate::traits::IntoErrorContext for $type {
            fn into_error_context(self) -> $crate::types::ErrorContext {
                $crate::types::ErrorContext::new(self.to_string())
            }
        }
    };
}
