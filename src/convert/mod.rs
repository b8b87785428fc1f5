//! Conversions between `Result`, [`Rail`] and [`ChainError`].
//!
//! These let a rail start from existing code that returns `Result` and hand
//! its outcome back to code that expects one.
//!
//! # Examples
//!
//! ```
//! use ok_rail::convert::*;
//!
//! let rail = result_to_rail(Ok::<i32, &str>(42));
//! assert!(rail.is_ok());
//!
//! let back = rail_to_result(rail);
//! assert_eq!(back.ok(), Some(42));
//! ```

use crate::rail::Rail;
use crate::types::{ChainError, ChainResult};

/// Lifts a `Result` into a [`Rail`] without context.
#[inline]
pub fn result_to_rail<T, E>(result: Result<T, E>) -> Rail<T, E> {
    Rail::from_result(result)
}

/// Lowers a [`Rail`] into a `Result` that keeps the whole chain.
#[inline]
pub fn rail_to_result<T, E>(rail: Rail<T, E>) -> ChainResult<T, E> {
    rail.into_result()
}

/// Lowers a [`Rail`] into a `Result` of the root error, dropping every layer.
///
/// # Examples
///
/// ```
/// use ok_rail::{convert::rail_to_root_result, Rail};
///
/// let rail = Rail::<u8, _>::fail("disk full").context("saving");
/// assert_eq!(rail_to_root_result(rail), Err("disk full"));
/// ```
#[inline]
pub fn rail_to_root_result<T, E>(rail: Rail<T, E>) -> Result<T, E> {
    rail.into_result().map_err(ChainError::into_root)
}

/// Drops the context layers, returning the root error.
///
/// # Examples
///
/// ```
/// use ok_rail::{convert::chain_to_root, ChainError};
///
/// let chain = ChainError::new("error").wrap("additional context");
/// assert_eq!(chain_to_root(chain), "error");
/// ```
#[inline]
pub fn chain_to_root<E>(chain: ChainError<E>) -> E {
    chain.into_root()
}

/// Starts a chain with no layers.
#[inline]
pub fn root_to_chain<E>(error: E) -> ChainError<E> {
    ChainError::new(error)
}

/// Collapses a rail of rails into one.
///
/// # Examples
///
/// ```
/// use ok_rail::{convert::flatten_rail, Rail};
///
/// let nested: Rail<Rail<i32, &str>, &str> = Rail::ok(Rail::ok(3));
/// assert_eq!(flatten_rail(nested).unwrap(), 3);
/// ```
#[inline]
pub fn flatten_rail<T, E>(rail: Rail<Rail<T, E>, E>) -> Rail<T, E> {
    rail.and_then(|inner| inner)
}

impl<T, E> From<Result<T, E>> for Rail<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Rail::from_result(result)
    }
}

impl<T, E> From<Rail<T, E>> for ChainResult<T, E> {
    #[inline]
    fn from(rail: Rail<T, E>) -> Self {
        rail.into_result()
    }
}
