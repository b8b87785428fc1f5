//! Error payload types.
//!
//! [`ChainError`] is what a failed [`Rail`](crate::Rail) carries: the original
//! failure plus the [`ErrorContext`] layers wrapped around it. [`LazyContext`]
//! defers building a layer until a failure actually needs it.
//!
//! # Examples
//!
//! ```
//! use ok_rail::{ChainError, ErrorContext};
//!
//! let err = ChainError::new("disk full")
//!     .wrap(ErrorContext::tag("storage"))
//!     .wrap("saving invoice");
//!
//! assert_eq!(err.to_string(), "saving invoice -> [storage] -> disk full");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod chain_error;
pub mod error_context;
pub mod error_formatter;
pub mod lazy_context;

pub use chain_error::*;
pub use error_context::*;
pub use lazy_context::*;

/// SmallVec-backed storage for context layers.
///
/// Most chains carry zero or one layer, so a single inline slot covers the
/// common case without touching the heap.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// `Result` whose failure is a [`ChainError`]; what [`Rail::into_result`](crate::Rail::into_result) returns.
pub type ChainResult<T, E> = Result<T, ChainError<E>>;
