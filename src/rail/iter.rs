use core::iter::FusedIterator;

use crate::rail::Rail;
use crate::types::ChainResult;

/// Borrowing iterator over the success value (zero or one item).
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the success value (zero or one item).
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T, E> IntoIterator for Rail<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_value() }
    }
}

impl<'a, T, E> IntoIterator for &'a Rail<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> Rail<T, E> {
    /// Iterates over the success value, if any.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.value() }
    }
}

/// Collects rails into a rail of a collection.
///
/// Stops at the first failure: later items are not pulled from the source
/// iterator, so steps producing them never run.
///
/// ```
/// use ok_rail::Rail;
///
/// let all: Rail<Vec<i32>, &str> = vec![Rail::ok(1), Rail::ok(2)].into_iter().collect();
/// assert_eq!(all.unwrap(), vec![1, 2]);
///
/// let mut pulled = 0;
/// let first_err: Rail<Vec<i32>, &str> = (0..5)
///     .map(|i| {
///         pulled += 1;
///         if i == 1 { Rail::fail("bad item") } else { Rail::ok(i) }
///     })
///     .collect();
/// assert!(first_err.is_err());
/// assert_eq!(pulled, 2);
/// ```
impl<T, E, V> FromIterator<Rail<T, E>> for Rail<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Rail<T, E>>>(iter: I) -> Self {
        let collected: ChainResult<V, E> = iter.into_iter().map(Rail::into_result).collect();
        match collected {
            Ok(values) => Rail::Ok(values),
            Err(error) => Rail::Err(error),
        }
    }
}
