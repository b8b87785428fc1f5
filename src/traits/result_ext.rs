//! Extension trait that lifts a plain `Result` onto the rail.
//!
//! Most step functions in the wild return `Result<T, E>`. [`ResultExt`] turns
//! such a value into a [`Rail`], optionally wrapping the error in a context
//! layer on the way.
//!
//! # Examples
//!
//! ```
//! use ok_rail::traits::ResultExt;
//!
//! fn parse_quantity(raw: &str) -> Result<u32, std::num::ParseIntError> {
//!     raw.trim().parse()
//! }
//!
//! let qty = parse_quantity("12").ctx("reading quantity").map_value(|q| q * 2);
//! assert_eq!(qty.unwrap(), 24);
//!
//! let err = parse_quantity("twelve").ctx("reading quantity").unwrap_err();
//! assert!(err.error_chain().starts_with("reading quantity -> "));
//! ```

use crate::rail::Rail;
use crate::traits::IntoErrorContext;
use crate::types::alloc_type::String;
use crate::types::{ChainError, LazyContext};

/// Lifts `Result<T, E>` into [`Rail<T, E>`].
pub trait ResultExt<T, E> {
    /// Converts without adding context.
    fn into_rail(self) -> Rail<T, E>;

    /// Converts, wrapping an error in `msg`.
    fn ctx<C: IntoErrorContext>(self, msg: C) -> Rail<T, E>;

    /// Converts, wrapping an error in the message produced by `f`.
    ///
    /// `f` only runs when the result is an `Err`.
    ///
    /// ```
    /// use ok_rail::traits::ResultExt;
    ///
    /// let mut called = false;
    /// let rail = Ok::<u8, &str>(1).ctx_with(|| {
    ///     called = true;
    ///     "never built".to_string()
    /// });
    /// assert!(rail.is_ok());
    /// assert!(!called);
    /// ```
    fn ctx_with<F>(self, f: F) -> Rail<T, E>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_rail(self) -> Rail<T, E> {
        Rail::from_result(self)
    }

    #[inline]
    fn ctx<C: IntoErrorContext>(self, msg: C) -> Rail<T, E> {
        match self {
            Ok(value) => Rail::Ok(value),
            Err(error) => Rail::Err(ChainError::new(error).wrap(msg)),
        }
    }

    #[inline]
    fn ctx_with<F>(self, f: F) -> Rail<T, E>
    where
        F: FnOnce() -> String,
    {
        self.ctx(LazyContext::new(f))
    }
}
