//! The error payload carried by [`Rail::Err`](crate::Rail::Err).
//!
//! A [`ChainError`] is a cause chain: the original failure (the *root*) plus a
//! stack of [`ErrorContext`] layers that were wrapped around it on the way out.
//! Wrapping is the "join" operation: the new layer becomes the outermost one
//! and everything that was there before becomes its cause.
//!
//! ```text
//! "charging card" -> "processing order" -> "payment declined"
//!   outermost          ...                  root
//! ```
//!
//! The root keeps its own type `E`, so callers can still match on it after any
//! number of layers have been added.

use core::iter::Rev;
use core::slice;

use crate::traits::IntoErrorContext;
use crate::types::alloc_type::{format, String, Vec};
use crate::types::error_formatter::{ErrorFormatBuilder, ErrorFormatter};
use crate::types::{ErrorContext, ErrorVec};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod links;
mod traits;

pub use links::{ChainLink, Links};

/// Root error plus the context layers wrapped around it.
///
/// # Examples
///
/// ```
/// use ok_rail::ChainError;
///
/// let err = ChainError::new("connection refused")
///     .wrap("fetching inventory")
///     .wrap("processing order 42");
///
/// assert_eq!(err.root(), &"connection refused");
/// assert_eq!(err.depth(), 2);
/// assert_eq!(
///     err.error_chain(),
///     "processing order 42 -> fetching inventory -> connection refused"
/// );
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainError<E> {
    pub(crate) root: E,
    /// Innermost first; the last entry is the most recent wrap.
    pub(crate) layers: ErrorVec<ErrorContext>,
}

impl<E> ChainError<E> {
    /// Starts a chain with `root` and no context.
    #[inline]
    pub fn new(root: E) -> Self {
        Self { root, layers: ErrorVec::new() }
    }

    /// Wraps the chain in one more context layer.
    ///
    /// The new layer becomes the outermost entry; the root is left untouched.
    #[inline]
    pub fn wrap<C>(mut self, context: C) -> Self
    where
        C: IntoErrorContext,
    {
        self.layers.push(context.into_error_context());
        self
    }

    /// Wraps the chain in several layers, innermost first.
    #[inline]
    pub fn wrap_all<I>(mut self, contexts: I) -> Self
    where
        I: IntoIterator<Item = ErrorContext>,
    {
        self.layers.extend(contexts);
        self
    }

    /// Returns the original failure.
    #[inline]
    pub fn root(&self) -> &E {
        &self.root
    }

    /// Consumes the chain, returning the original failure.
    #[inline]
    pub fn into_root(self) -> E {
        self.root
    }

    /// Context layers, outermost (most recent) first.
    #[inline]
    pub fn layers(&self) -> Rev<slice::Iter<'_, ErrorContext>> {
        self.layers.iter().rev()
    }

    /// The most recently added layer, if any.
    #[inline]
    pub fn outermost(&self) -> Option<&ErrorContext> {
        self.layers.last()
    }

    /// Number of context layers around the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` once at least one layer has been wrapped around the root.
    #[inline]
    pub fn is_wrapped(&self) -> bool {
        !self.layers.is_empty()
    }

    /// Walks the whole chain from the outermost layer down to the root.
    ///
    /// ```
    /// use ok_rail::{ChainError, ChainLink};
    ///
    /// let err = ChainError::new("boom").wrap("inner").wrap("outer");
    /// let rendered: Vec<String> = err.links().map(|link| link.to_string()).collect();
    /// assert_eq!(rendered, ["outer", "inner", "boom"]);
    /// assert!(matches!(err.links().last(), Some(ChainLink::Root(&"boom"))));
    /// ```
    #[inline]
    pub fn links(&self) -> Links<'_, E> {
        Links::new(self.layers.iter().rev(), &self.root)
    }

    /// Transforms the root error, keeping every layer.
    #[inline]
    pub fn map_root<F, G>(self, f: F) -> ChainError<G>
    where
        F: FnOnce(E) -> G,
    {
        ChainError { root: f(self.root), layers: self.layers }
    }

    /// Splits the chain into its root and its layers (outermost first).
    pub fn into_parts(self) -> (E, Vec<ErrorContext>) {
        let mut layers = self.layers.into_vec();
        layers.reverse();
        (self.root, layers)
    }

    /// Returns a builder for customizing how the chain is rendered.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> ErrorFormatBuilder<'_, E> {
        ErrorFormatBuilder::new(self)
    }

    /// Renders the chain after letting `f` configure the builder.
    ///
    /// ```
    /// use ok_rail::ChainError;
    ///
    /// let err = ChainError::new("boom").wrap("step");
    /// assert_eq!(err.format_with(|b| b.with_separator(" | ")), "step | boom");
    /// ```
    #[must_use]
    pub fn format_with<F>(&self, f: F) -> String
    where
        E: core::fmt::Display,
        F: FnOnce(ErrorFormatBuilder<'_, E>) -> ErrorFormatBuilder<'_, E>,
    {
        format!("{}", f(self.fmt()))
    }

    /// Renders the chain with a custom [`ErrorFormatter`].
    #[must_use]
    pub fn error_chain_with<F>(&self, formatter: F) -> String
    where
        E: core::fmt::Display,
        F: ErrorFormatter,
    {
        formatter.format_chain(self.links().map(|link| link.as_display()))
    }

    /// Renders the chain as `outer -> ... -> root`.
    #[must_use]
    pub fn error_chain(&self) -> String
    where
        E: core::fmt::Display,
    {
        format!("{}", self.fmt())
    }
}
