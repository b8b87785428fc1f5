use core::fmt::{Debug, Display};

use crate::context::wrap_context;
use crate::traits::IntoErrorContext;
use crate::types::alloc_type::String;
use crate::types::{ChainError, ChainResult, LazyContext};

/// A value of type `T`, or the [`ChainError`] that prevented producing one.
///
/// The error state carries no `T` at all: only the variant decides which side
/// is populated. Every combinator consumes the rail and returns a new one.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The root error type of the chain
///
/// # Examples
///
/// ```
/// use ok_rail::Rail;
///
/// let price: Rail<u32, &str> = Rail::ok(300);
/// assert!(price.is_ok());
///
/// let missing: Rail<u32, &str> = Rail::fail("product 10 is not available");
/// assert_eq!(missing.unwrap_or(0), 0);
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Rail<T, E> {
    Ok(T),
    Err(ChainError<E>),
}

/// Creates a rail in the success state.
///
/// ```
/// use ok_rail::ok;
///
/// assert_eq!(ok::<_, &str>(42).unwrap(), 42);
/// ```
#[inline]
pub fn ok<T, E>(value: T) -> Rail<T, E> {
    Rail::ok(value)
}

/// Creates a rail in the error state, rooted at `error`.
///
/// ```
/// use ok_rail::fail;
///
/// let rail = fail::<u8, _>("test error");
/// assert_eq!(rail.error().map(|e| *e.root()), Some("test error"));
/// ```
#[inline]
pub fn fail<T, E>(error: E) -> Rail<T, E> {
    Rail::fail(error)
}

/// Adapts the `(value, error)` pair idiom: fails when `error` is present.
///
/// ```
/// use ok_rail::{from_outcome, ok};
///
/// assert_eq!(from_outcome(42, None::<&str>), ok(42));
/// assert!(from_outcome(0, Some("test error")).is_err());
/// ```
#[inline]
pub fn from_outcome<T, E>(value: T, error: Option<E>) -> Rail<T, E> {
    Rail::from_outcome(value, error)
}

impl<T, E> Rail<T, E> {
    /// Creates a rail in the success state.
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates a rail in the error state with a fresh chain rooted at `error`.
    #[inline]
    pub fn fail(error: E) -> Self {
        Self::Err(ChainError::new(error))
    }

    /// Creates a rail in the error state from an existing chain.
    #[inline]
    pub fn fail_chain(error: ChainError<E>) -> Self {
        Self::Err(error)
    }

    /// Returns [`Rail::fail`] when `error` is `Some`, otherwise [`Rail::ok`].
    ///
    /// `value` is dropped unused in the first case.
    #[inline]
    pub fn from_outcome(value: T, error: Option<E>) -> Self {
        match error {
            Some(error) => Self::fail(error),
            None => Self::ok(value),
        }
    }

    /// Lifts a plain `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::fail(error),
        }
    }

    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Borrows the success value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Borrows the error chain, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&ChainError<E>> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Consumes the rail, returning the success value if there is one.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Consumes the rail, returning the error chain if there is one.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<ChainError<E>> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Leaves the rail for a standard `Result`, e.g. to use `?`.
    #[inline]
    pub fn into_result(self) -> ChainResult<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Wraps the error, if any, in one more layer without running a step.
    ///
    /// ```
    /// use ok_rail::Rail;
    ///
    /// let rail = Rail::<(), _>::fail("boom").context("loading config");
    /// assert_eq!(rail.unwrap_err().error_chain(), "loading config -> boom");
    ///
    /// let rail = Rail::<_, &str>::ok(1).context("ignored");
    /// assert_eq!(rail.unwrap(), 1);
    /// ```
    #[inline]
    pub fn context<C>(self, context: C) -> Self
    where
        C: IntoErrorContext,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err(error) => Self::Err(wrap_context(error, Some(context))),
        }
    }

    /// Like [`context`](Self::context) with a message built only on failure.
    #[inline]
    pub fn context_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context(LazyContext::new(f))
    }

    /// Transforms the root error type, keeping every context layer.
    #[inline]
    pub fn map_root<F, G>(self, f: F) -> Rail<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Rail::Ok(value),
            Self::Err(error) => Rail::Err(error.map_root(f)),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics when the rail is in the error state; the message contains the
    /// rendered cause chain. Only use this where failure is a bug, not an
    /// expected outcome.
    ///
    /// ```should_panic
    /// use ok_rail::Rail;
    ///
    /// Rail::<u8, _>::fail("unwrap error").unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Display,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => unwrap_failed("called `Rail::unwrap()` on an `Err` value", &error),
        }
    }

    /// Returns the success value, panicking with `msg` and the chain otherwise.
    ///
    /// # Panics
    ///
    /// Panics when the rail is in the error state.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: Display,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => unwrap_failed(msg, &error),
        }
    }

    /// Returns the error chain.
    ///
    /// # Panics
    ///
    /// Panics when the rail is in the success state.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> ChainError<E>
    where
        T: Debug,
    {
        match self {
            Self::Ok(value) => unwrap_err_failed(&value),
            Self::Err(error) => error,
        }
    }

    /// Returns the success value, or `default` in the error state.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value, or calls `fallback` in the error state.
    ///
    /// `fallback` runs at most once and never on the success path.
    ///
    /// ```
    /// use ok_rail::Rail;
    ///
    /// let mut calls = 0;
    /// let value = Rail::<u32, _>::fail("cache miss").unwrap_or_else(|| {
    ///     calls += 1;
    ///     7
    /// });
    /// assert_eq!((value, calls), (7, 1));
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => fallback(),
        }
    }

    /// Returns the success value, or `T::default()` in the error state.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn unwrap_failed<E: Display>(msg: &str, error: &ChainError<E>) -> ! {
    panic!("{msg}: {error}")
}

#[cold]
#[inline(never)]
#[track_caller]
fn unwrap_err_failed<T: Debug>(value: &T) -> ! {
    panic!("called `Rail::unwrap_err()` on an `Ok` value: {value:?}")
}
