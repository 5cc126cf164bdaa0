//! The entity identifier type and its validator.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::IdError;

/// Number of characters in a ULID.
pub const ULID_LEN: usize = 26;

/// The Crockford base32 alphabet, in encoding order.
pub const CROCKFORD_ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Returns true if `c` belongs to the uppercase Crockford base32 alphabet.
#[must_use]
pub const fn is_crockford_char(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='H' | 'J' | 'K' | 'M' | 'N' | 'P'..='T' | 'V'..='Z')
}

/// Checks `candidate` against the ULID grammar and reports the first violation.
pub fn validate_ulid(candidate: &str) -> Result<(), IdError> {
    if candidate.is_empty() {
        return Err(IdError::Empty);
    }

    let len = candidate.chars().count();
    if len != ULID_LEN {
        return Err(IdError::InvalidLength {
            expected: ULID_LEN,
            actual: len,
        });
    }

    match candidate
        .chars()
        .enumerate()
        .find(|(_, c)| !is_crockford_char(*c))
    {
        Some((position, character)) => Err(IdError::InvalidCharacter {
            position,
            character,
        }),
        None => Ok(()),
    }
}

/// Returns true if `candidate` is exactly 26 uppercase Crockford base32 characters.
///
/// Lowercase input is rejected rather than folded.
#[must_use]
pub fn is_valid_ulid(candidate: &str) -> bool {
    validate_ulid(candidate).is_ok()
}

/// Reinterprets a string as an [`EntityId`] without validating it.
#[must_use]
pub fn cast_entity_id(candidate: impl Into<String>) -> EntityId {
    EntityId(candidate.into())
}

/// An opaque entity identifier.
///
/// Usually a ULID, but may hold a fallback UUID or any string passed through
/// [`cast_entity_id`]. Ordering is plain string ordering, which for ULIDs follows
/// creation time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(String);

impl EntityId {
    /// Parses an ID, accepting only the 26-character ULID form.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        validate_ulid(s)?;
        Ok(Self(s.to_string()))
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns the underlying string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns true if this ID is in the 26-character ULID form.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid_ulid(&self.0)
    }

    /// Returns the embedded timestamp in milliseconds, if this is a decodable ULID.
    #[cfg(feature = "ulid")]
    #[must_use]
    pub fn timestamp_ms(&self) -> Option<u64> {
        if !self.is_valid() {
            return None;
        }
        ulid::Ulid::from_string(&self.0)
            .ok()
            .map(|ulid| ulid.timestamp_ms())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Deref for EntityId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl PartialEq<str> for EntityId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntityId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for EntityId {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

impl PartialEq<EntityId> for &str {
    fn eq(&self, other: &EntityId) -> bool {
        *self == other.0
    }
}

impl PartialEq<EntityId> for String {
    fn eq(&self, other: &EntityId) -> bool {
        *self == other.0
    }
}

// Serialized without validation so fallback UUIDs survive a round trip.
impl serde::Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self)
    }
}
