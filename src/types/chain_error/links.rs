use core::fmt::{self, Display};
use core::iter::{FusedIterator, Rev};
use core::slice;

use crate::types::ErrorContext;

/// One link of a cause chain, as yielded by [`ChainError::links`](super::ChainError::links).
#[derive(Debug, PartialEq, Eq)]
pub enum ChainLink<'a, E> {
    /// A wrapping layer.
    Context(&'a ErrorContext),
    /// The original failure; always the last link.
    Root(&'a E),
}

impl<'a, E> ChainLink<'a, E> {
    /// Returns `true` for the root link.
    #[inline]
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root(_))
    }

    /// Views the link as a trait object for formatters.
    #[inline]
    pub fn as_display(self) -> &'a dyn Display
    where
        E: Display,
    {
        match self {
            Self::Context(ctx) => ctx,
            Self::Root(root) => root,
        }
    }
}

impl<E> Clone for ChainLink<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ChainLink<'_, E> {}

impl<E: Display> Display for ChainLink<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Context(ctx) => Display::fmt(ctx, f),
            Self::Root(root) => Display::fmt(root, f),
        }
    }
}

/// Iterator over a cause chain, outermost layer first and root last.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Links<'a, E> {
    layers: Rev<slice::Iter<'a, ErrorContext>>,
    root: Option<&'a E>,
}

impl<'a, E> Links<'a, E> {
    pub(super) fn new(layers: Rev<slice::Iter<'a, ErrorContext>>, root: &'a E) -> Self {
        Self { layers, root: Some(root) }
    }
}

impl<'a, E> Iterator for Links<'a, E> {
    type Item = ChainLink<'a, E>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.layers.next() {
            Some(ctx) => Some(ChainLink::Context(ctx)),
            None => self.root.take().map(ChainLink::Root),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.layers.len() + usize::from(self.root.is_some());
        (len, Some(len))
    }
}

impl<E> ExactSizeIterator for Links<'_, E> {}

impl<E> FusedIterator for Links<'_, E> {}
