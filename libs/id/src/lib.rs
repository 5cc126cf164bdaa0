//! # coretypes-id
//!
//! Sortable entity identifiers shared across services.
//!
//! ## Design Principles
//!
//! - Generation never fails: if the preferred scheme is unavailable the generator
//!   silently degrades to a random UUID
//! - Validation is strict: exact length, exact alphabet, uppercase only
//! - IDs are opaque strings to the rest of the system
//!
//! ## ID Format
//!
//! The preferred format is a 26-character ULID in Crockford base32:
//!
//! - `01H2XGMTVZ1QW1F4KJJNVD0YJR`
//!
//! The first 10 characters encode a millisecond timestamp, so lexicographic order
//! follows creation time. When the `ulid` feature is disabled, ids are 36-character
//! hyphenated v4 UUIDs instead:
//!
//! - `12345678-1234-5678-1234-567812345678`
//!
//! Only the 26-character form passes [`is_valid_ulid`].

mod entity;
mod error;
mod scheme;

pub use entity::{
    cast_entity_id, is_crockford_char, is_valid_ulid, validate_ulid, EntityId,
    CROCKFORD_ALPHABET, ULID_LEN,
};
pub use error::IdError;
pub use scheme::{generate_entity_id, IdScheme, UUID_LEN};
