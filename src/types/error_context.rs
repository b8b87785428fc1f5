//! A single layer of context wrapped around an error.
//!
//! Every time a combinator wraps a failure it pushes one [`ErrorContext`] onto
//! the [`ChainError`](crate::types::ChainError) it carries. Plain messages are
//! by far the most common layer; tags and key/value metadata exist for callers
//! that want something they can filter on later.
use core::fmt::{self, Display};

use crate::types::alloc_type::{format, Cow};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One wrapping layer of a cause chain.
///
/// # Examples
///
/// ```
/// use ok_rail::ErrorContext;
///
/// assert_eq!(ErrorContext::new("loading order").to_string(), "loading order");
/// assert_eq!(ErrorContext::tag("db").to_string(), "[db]");
/// assert_eq!(ErrorContext::metadata("order_id", "42").to_string(), "order_id=42");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    /// Free-form description of what was being attempted.
    Message(Cow<'static, str>),
    /// Short categorical label, rendered as `[tag]`.
    Tag(Cow<'static, str>),
    /// Key/value pair, rendered as `key=value`.
    Metadata { key: Cow<'static, str>, value: Cow<'static, str> },
}

impl ErrorContext {
    /// Creates a message layer.
    #[inline]
    pub fn new<S: Into<Cow<'static, str>>>(message: S) -> Self {
        Self::Message(message.into())
    }

    /// Creates a tag layer.
    #[inline]
    pub fn tag<S: Into<Cow<'static, str>>>(tag: S) -> Self {
        Self::Tag(tag.into())
    }

    /// Creates a key/value metadata layer.
    #[inline]
    pub fn metadata<K, V>(key: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<Cow<'static, str>>,
    {
        Self::Metadata { key: key.into(), value: value.into() }
    }

    /// Returns the rendered text of this layer.
    ///
    /// Message layers are borrowed as-is; tags and metadata are formatted.
    #[must_use]
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Self::Message(msg) => Cow::Borrowed(msg.as_ref()),
            Self::Tag(tag) => Cow::Owned(format!("[{}]", tag)),
            Self::Metadata { key, value } => Cow::Owned(format!("{}={}", key, value)),
        }
    }

    /// Returns `true` for plain message layers.
    #[inline]
    #[must_use]
    pub fn is_message(&self) -> bool {
        matches!(self, Self::Message(_))
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(msg) => f.write_str(msg),
            Self::Tag(tag) => write!(f, "[{}]", tag),
            Self::Metadata { key, value } => write!(f, "{}={}", key, value),
        }
    }
}
