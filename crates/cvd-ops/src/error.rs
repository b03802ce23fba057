//! Error types for filter operations.

use thiserror::Error;

/// Error type for filter selection.
///
/// Applying a kernel never fails; the only failure is asking for a filter
/// that does not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Filter name is not in the registry. Names are case-sensitive.
    #[error("unknown filter '{name}' (expected one of: {})", crate::registry::FilterRegistry::standard().names_joined())]
    UnknownFilter {
        /// The name that was requested
        name: String,
    },
}

impl OpsError {
    /// Creates an [`OpsError::UnknownFilter`] error.
    #[inline]
    pub fn unknown_filter(name: impl Into<String>) -> Self {
        Self::UnknownFilter { name: name.into() }
    }

    /// Returns `true` if this is an unknown-filter error.
    #[inline]
    pub fn is_unknown_filter(&self) -> bool {
        matches!(self, Self::UnknownFilter { .. })
    }
}

/// Result type for filter operations.
pub type OpsResult<T> = Result<T, OpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_filter_message() {
        let err = OpsError::unknown_filter("Purple");
        let msg = err.to_string();
        assert!(msg.contains("'Purple'"));
        assert!(msg.contains("Deuteranope"));
        assert!(msg.contains("Yellow"));
        assert!(err.is_unknown_filter());
    }
}
