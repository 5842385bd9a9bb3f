//! Error types for sqlsift.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    /// A caller handed the builder something it cannot work with: a blank
    /// field name, a NULL value against an operator with no NULL comparison
    /// semantics, or an operator outside the field's type category.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A token sequence violated the builder invariant (dangling connective
    /// or unbalanced grouping). Unreachable through the public API; the
    /// renderer checks for it anyway.
    #[error("Invalid filter state: {0}")]
    InvalidState(String),
}

impl FilterError {
    /// Create an `InvalidArgument` error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an `InvalidState` error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

/// Result type alias for sqlsift operations.
pub type FilterResult<T> = Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FilterError::invalid_argument("field name is blank");
        assert_eq!(err.to_string(), "Invalid argument: field name is blank");

        let err = FilterError::invalid_state("unbalanced grouping");
        assert_eq!(err.to_string(), "Invalid filter state: unbalanced grouping");
    }
}
