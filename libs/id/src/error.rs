//! Error types for entity ID validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating entity IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The ID does not have the required number of characters.
    #[error("invalid ID length: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The ID contains a character outside the uppercase Crockford base32 alphabet.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { position: usize, character: char },
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if this error indicates a length mismatch.
    pub fn is_length_error(&self) -> bool {
        matches!(self, IdError::InvalidLength { .. })
    }

    /// Returns true if the offending character is a lowercase form of a valid one.
    pub fn is_case_error(&self) -> bool {
        match self {
            IdError::InvalidCharacter { character, .. } => {
                crate::is_crockford_char(character.to_ascii_uppercase())
            }
            _ => false,
        }
    }
}
