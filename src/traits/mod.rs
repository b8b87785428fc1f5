//! Traits at the edges of the rail.
//!
//! - [`IntoErrorContext`]: anything that can become one context layer.
//! - [`ResultExt`]: lifts a plain `Result` into a [`Rail`](crate::Rail).
//!
//! # Examples
//!
//! ```
//! use ok_rail::traits::{IntoErrorContext, ResultExt};
//!
//! let rail = Err::<(), _>("not found").ctx("loading user".into_error_context());
//! assert_eq!(rail.unwrap_err().error_chain(), "loading user -> not found");
//! ```

pub mod into_error_context;
pub mod result_ext;

pub use into_error_context::IntoErrorContext;
pub use result_ext::ResultExt;
