use core::error::Error;
use core::fmt::{self, Display};

use super::ChainError;
use crate::types::error_formatter::ErrorFormatBuilder;

/// `{}` renders `outer -> ... -> root`; `{:#}` renders one indented line per link.
impl<E: Display> Display for ChainError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let builder = ErrorFormatBuilder::new(self);
        match f.alternate() {
            true => write!(f, "{}", builder.cascaded()),
            false => write!(f, "{}", builder),
        }
    }
}

/// The root is the only `source`; context layers are not errors themselves.
impl<E> Error for ChainError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.root)
    }
}

impl<E> From<E> for ChainError<E> {
    #[inline]
    fn from(root: E) -> Self {
        Self::new(root)
    }
}
