//! Name-to-kernel lookup.
//!
//! The standard registry is a fixed static table. It is never mutated, so it
//! can be shared freely between threads and requests.

use std::str::FromStr;

use cvd_core::PixelBuffer;

use crate::error::{OpsError, OpsResult};
use crate::kernel::FilterKernel;

static STANDARD: [(&str, FilterKernel); 5] = [
    ("Original", FilterKernel::Identity),
    ("Deuteranope", FilterKernel::Deuteranope),
    ("Dark", FilterKernel::Dark),
    ("Blue", FilterKernel::Blue),
    ("Yellow", FilterKernel::Yellow),
];

/// Maps public filter names to kernels.
///
/// Lookups are exact and case-sensitive: `"Blue"` resolves, `"blue"` does
/// not.
///
/// # Example
///
/// ```rust
/// use cvd_ops::{FilterKernel, FilterRegistry};
///
/// let registry = FilterRegistry::standard();
/// assert_eq!(registry.lookup("Dark").unwrap(), FilterKernel::Dark);
/// assert!(registry.lookup("Purple").unwrap_err().is_unknown_filter());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FilterRegistry {
    entries: &'static [(&'static str, FilterKernel)],
}

impl FilterRegistry {
    /// The registry of the five public filters.
    pub const fn standard() -> Self {
        Self { entries: &STANDARD }
    }

    /// Resolves a filter name.
    pub fn lookup(&self, name: &str) -> OpsResult<FilterKernel> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, k)| *k)
            .ok_or_else(|| OpsError::unknown_filter(name))
    }

    /// Returns `true` if `name` resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    /// Registered names in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub(crate) fn names_joined(&self) -> String {
        self.names().collect::<Vec<_>>().join(", ")
    }

    /// Name/kernel pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, FilterKernel)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of registered filters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no filters are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves `name` and applies it to `src`.
    pub fn apply(&self, name: &str, src: &PixelBuffer) -> OpsResult<PixelBuffer> {
        Ok(self.lookup(name)?.apply(src))
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for FilterKernel {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterRegistry::standard().lookup(s)
    }
}
