//! Cause chain formatting.
//!
//! [`ChainError`] renders itself as `outer -> inner -> root` by default. The
//! pieces here let callers pick another layout, either through one of the
//! [`ErrorFormatConfig`] presets or by implementing [`ErrorFormatter`].
//!
//! ```
//! use ok_rail::{ChainError, ErrorFormatConfig};
//!
//! let err = ChainError::new("payment declined")
//!     .wrap("charging card")
//!     .wrap("processing order");
//!
//! assert_eq!(
//!     err.error_chain_with(ErrorFormatConfig::compact()),
//!     "processing order | charging card | payment declined"
//! );
//! assert_eq!(
//!     err.fmt().cascaded().to_string(),
//!     "processing order\n  charging card\n    payment declined"
//! );
//! ```

use crate::types::alloc_type::{String, ToString, Vec};
use crate::types::ChainError;
use core::fmt::Display;

/// Renders a chain given as an iterator of links, outermost first.
pub trait ErrorFormatter {
    fn format_item(&self, item: &dyn Display) -> String {
        item.to_string()
    }

    fn separator(&self) -> &str {
        " -> "
    }

    fn format_chain<'a>(&self, chain: impl Iterator<Item = &'a dyn Display>) -> String {
        chain
            .map(|item| self.format_item(item))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Configuration-driven formatter with a few presets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub context_prefix: Option<String>,
    pub context_suffix: Option<String>,
    pub root_prefix: Option<String>,
    pub root_suffix: Option<String>,
    pub indent: String,
    /// Indent each link one step further than the previous one.
    pub cascade: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: " -> ".into(),
            context_prefix: None,
            context_suffix: None,
            root_prefix: None,
            root_suffix: None,
            indent: "  ".into(),
            cascade: false,
        }
    }
}

impl ErrorFormatConfig {
    /// Tree-like multi-line layout.
    #[inline]
    pub fn pretty() -> Self {
        Self {
            separator: "\n".into(),
            context_prefix: Some("├─ ".into()),
            root_prefix: Some("└─ ".into()),
            ..Default::default()
        }
    }

    /// One link per line, each indented deeper than the last.
    #[inline]
    pub fn cascaded() -> Self {
        Self { separator: "\n".into(), cascade: true, ..Default::default() }
    }

    /// Single line separated by ` | `.
    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_chain<'a>(&self, chain: impl Iterator<Item = &'a dyn Display>) -> String {
        let items: Vec<_> = chain.collect();
        let Some(last_idx) = items.len().checked_sub(1) else {
            return String::new();
        };

        let mut result = String::with_capacity(items.len() * 32);
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                result.push_str(&self.separator);
                if self.cascade {
                    for _ in 0..i {
                        result.push_str(&self.indent);
                    }
                }
            }

            let is_root = i == last_idx;
            let (prefix, suffix) = if is_root {
                (
                    self.root_prefix.as_ref().or(self.context_prefix.as_ref()),
                    self.root_suffix.as_ref().or(self.context_suffix.as_ref()),
                )
            } else {
                (self.context_prefix.as_ref(), self.context_suffix.as_ref())
            };

            if let Some(p) = prefix {
                result.push_str(p);
            }
            result.push_str(&item.to_string());
            if let Some(s) = suffix {
                result.push_str(s);
            }
        }
        result
    }
}

/// Builder returned by [`ChainError::fmt`]; renders through `Display`.
#[must_use]
pub struct ErrorFormatBuilder<'a, E> {
    pub(crate) error: &'a ChainError<E>,
    pub(crate) config: ErrorFormatConfig,
    pub(crate) root_first: bool,
}

impl<'a, E> ErrorFormatBuilder<'a, E> {
    pub fn new(error: &'a ChainError<E>) -> Self {
        Self { error, config: ErrorFormatConfig::default(), root_first: false }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }

    /// Lists the root first and the outermost layer last.
    pub fn root_first(mut self, enabled: bool) -> Self {
        self.root_first = enabled;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.config = ErrorFormatConfig::pretty();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ErrorFormatConfig::compact();
        self
    }

    pub fn cascaded(mut self) -> Self {
        self.config = ErrorFormatConfig::cascaded();
        self
    }
}

impl<E> Display for ErrorFormatBuilder<'_, E>
where
    E: Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut items: Vec<&dyn Display> = self.error.links().map(|link| link.as_display()).collect();
        if self.root_first {
            items.reverse();
        }

        f.write_str(&self.config.format_chain(items.into_iter()))
    }
}
