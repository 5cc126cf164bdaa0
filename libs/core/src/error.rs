//! Validation errors raised by core type constructors and parsers.

use coretypes_id::IdError;
use thiserror::Error;

/// Errors raised when input does not satisfy a core type's invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A numeric field is below its minimum.
    #[error("{field} must be at least {min}, got {actual}")]
    BelowMinimum {
        field: &'static str,
        min: i64,
        actual: i64,
    },

    /// A string token does not name any member of a closed enumeration.
    #[error("'{value}' is not a valid {type_name}; expected one of: {}", .expected.join(", "))]
    UnknownVariant {
        type_name: &'static str,
        value: String,
        expected: &'static [&'static str],
    },

    /// The text is not an ISO-8601 UTC timestamp of the accepted shape.
    #[error("invalid ISO-8601 UTC timestamp: '{0}'")]
    InvalidTimestamp(String),

    /// The instant cannot be represented.
    #[error("timestamp out of range: {0}")]
    TimestampOutOfRange(String),

    /// An environment variable could not be read.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: &'static str, reason: String },

    /// The entity ID is malformed.
    #[error(transparent)]
    Id(#[from] IdError),
}

impl ValidationError {
    /// Returns true if this error came from a numeric bound check.
    pub fn is_range_error(&self) -> bool {
        matches!(self, ValidationError::BelowMinimum { .. })
    }

    /// Returns true if this error came from an unknown enumeration token.
    pub fn is_unknown_variant(&self) -> bool {
        matches!(self, ValidationError::UnknownVariant { .. })
    }

    /// Returns true if this error came from timestamp parsing or conversion.
    pub fn is_time_error(&self) -> bool {
        matches!(
            self,
            ValidationError::InvalidTimestamp(_) | ValidationError::TimestampOutOfRange(_)
        )
    }
}
