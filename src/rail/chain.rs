use crate::context::wrap_context;
use crate::rail::Rail;
use crate::traits::IntoErrorContext;
use crate::types::ErrorContext;

/// Chaining combinators.
///
/// All of them share one control shape: an input that already failed is
/// passed on without calling the step; otherwise the step runs once and a
/// failure it reports is passed on. The `_ctx` forms wrap the outgoing error in
/// one context layer in *both* failure cases.
///
/// Note that this means context attaches to every `_ctx` call that observes a
/// failure, not only to the call whose own step failed. A chain of three
/// `_ctx` calls behind an early failure produces three layers:
///
/// ```
/// use ok_rail::Rail;
///
/// let err = Rail::<i32, _>::fail("boom")
///     .and_then_ctx(|x| Rail::ok(x + 1), "first")
///     .and_then_ctx(|x| Rail::ok(x + 1), "second")
///     .and_then_ctx(|x| Rail::ok(x + 1), "third")
///     .unwrap_err();
///
/// assert_eq!(err.error_chain(), "third -> second -> first -> boom");
/// ```
impl<T, E> Rail<T, E> {
    /// Shared body of every combinator: `next` adapts the step's native
    /// return shape into a rail.
    #[inline]
    fn step<U, C, F>(self, context: Option<C>, next: F) -> Rail<U, E>
    where
        C: IntoErrorContext,
        F: FnOnce(T) -> Rail<U, E>,
    {
        match self {
            Self::Err(error) => Rail::Err(wrap_context(error, context)),
            Self::Ok(value) => match next(value) {
                Rail::Err(error) => Rail::Err(wrap_context(error, context)),
                passed => passed,
            },
        }
    }

    /// Chains a step that returns a [`Rail`].
    ///
    /// ```
    /// use ok_rail::Rail;
    ///
    /// fn double_if_positive(x: i32) -> Rail<i32, String> {
    ///     if x <= 0 {
    ///         return Rail::fail(format!("value must be positive, got {x}"));
    ///     }
    ///     Rail::ok(x * 2)
    /// }
    ///
    /// assert_eq!(Rail::ok(10).and_then(double_if_positive).unwrap(), 20);
    /// assert!(Rail::ok(-1).and_then(double_if_positive).is_err());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Rail<U, E>
    where
        F: FnOnce(T) -> Rail<U, E>,
    {
        self.step(None::<ErrorContext>, f)
    }

    /// [`and_then`](Self::and_then), wrapping any failure in `context`.
    #[inline]
    pub fn and_then_ctx<U, C, F>(self, f: F, context: C) -> Rail<U, E>
    where
        C: IntoErrorContext,
        F: FnOnce(T) -> Rail<U, E>,
    {
        self.step(Some(context), f)
    }

    /// Chains a step that returns a plain `Result`.
    ///
    /// ```
    /// use ok_rail::Rail;
    ///
    /// fn add_ten(x: i32) -> Result<i32, &'static str> {
    ///     Ok(x + 10)
    /// }
    ///
    /// fn divide_by_two(x: i32) -> Result<i32, &'static str> {
    ///     if x % 2 != 0 {
    ///         return Err("must be even");
    ///     }
    ///     Ok(x / 2)
    /// }
    ///
    /// let result = Rail::ok(20)
    ///     .and_then_outcome(add_ten)
    ///     .and_then_outcome(divide_by_two);
    /// assert_eq!(result.unwrap(), 15);
    /// ```
    #[inline]
    pub fn and_then_outcome<U, F>(self, f: F) -> Rail<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.step(None::<ErrorContext>, |value| Rail::from_result(f(value)))
    }

    /// [`and_then_outcome`](Self::and_then_outcome), wrapping any failure in `context`.
    ///
    /// ```
    /// use ok_rail::Rail;
    ///
    /// fn describe(v: i32) -> Result<String, &'static str> {
    ///     if v < 0 {
    ///         return Err("negative value");
    ///     }
    ///     Ok(format!("Value: {v}"))
    /// }
    ///
    /// let parsed = Rail::ok(-1223).and_then_outcome_ctx(describe, "conversion failed");
    /// assert_eq!(parsed.unwrap_err().error_chain(), "conversion failed -> negative value");
    /// ```
    #[inline]
    pub fn and_then_outcome_ctx<U, C, F>(self, f: F, context: C) -> Rail<U, E>
    where
        C: IntoErrorContext,
        F: FnOnce(T) -> Result<U, E>,
    {
        self.step(Some(context), |value| Rail::from_result(f(value)))
    }

    /// Chains a step that cannot fail.
    ///
    /// An incoming error is passed on exactly as it is; this combinator never
    /// adds context.
    ///
    /// ```
    /// use ok_rail::Rail;
    ///
    /// assert_eq!(Rail::<_, &str>::ok(4).map_value(|x| x * x).unwrap(), 16);
    /// ```
    #[inline]
    pub fn map_value<U, F>(self, f: F) -> Rail<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.step(None::<ErrorContext>, |value| Rail::Ok(f(value)))
    }

    /// Runs a check against the value without replacing it.
    ///
    /// When the check passes the rail comes back unchanged; when it fails the
    /// value is dropped and the check's error starts a new chain.
    ///
    /// ```
    /// use ok_rail::Rail;
    ///
    /// fn validate_positive(x: &i32) -> Result<(), &'static str> {
    ///     if *x <= 0 {
    ///         return Err("value must be positive");
    ///     }
    ///     Ok(())
    /// }
    ///
    /// assert_eq!(Rail::ok(16).check(validate_positive).unwrap(), 16);
    /// assert!(Rail::ok(-3).check(validate_positive).is_err());
    /// ```
    #[inline]
    pub fn check<F>(self, f: F) -> Rail<T, E>
    where
        F: FnOnce(&T) -> Result<(), E>,
    {
        self.step(None::<ErrorContext>, |value| verdict(value, f))
    }

    /// [`check`](Self::check), wrapping any failure in `context`.
    #[inline]
    pub fn check_ctx<C, F>(self, f: F, context: C) -> Rail<T, E>
    where
        C: IntoErrorContext,
        F: FnOnce(&T) -> Result<(), E>,
    {
        self.step(Some(context), |value| verdict(value, f))
    }
}

#[inline]
fn verdict<T, E, F>(value: T, f: F) -> Rail<T, E>
where
    F: FnOnce(&T) -> Result<(), E>,
{
    match f(&value) {
        Ok(()) => Rail::Ok(value),
        Err(error) => Rail::fail(error),
    }
}
