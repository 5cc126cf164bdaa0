//! Identity-compared marker values.
//!
//! A [`Sentinel`] is a named value that is always falsy and only ever equal to
//! itself (or its clones). [`NOT_GIVEN`] is the process-wide marker for "argument
//! not supplied"; [`crate::NotGivenOr`] uses it as its display and identity anchor.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity reserved for [`NOT_GIVEN`]. Fresh sentinels start counting after it.
const NOT_GIVEN_IDENTITY: u64 = 0;

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(NOT_GIVEN_IDENTITY + 1);

/// The well-known "not given" sentinel.
pub static NOT_GIVEN: Sentinel = Sentinel {
    identity: NOT_GIVEN_IDENTITY,
    name: Cow::Borrowed("NotGiven"),
};

/// A named marker compared by identity.
///
/// Clones share the identity of the original. Two sentinels created separately
/// are never equal, even with the same name.
#[derive(Clone)]
pub struct Sentinel {
    identity: u64,
    name: Cow<'static, str>,
}

impl Sentinel {
    /// Creates a new sentinel with a fresh identity.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            identity: NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sentinels are always falsy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        false
    }

    /// Returns true if this is the process-wide [`NOT_GIVEN`] instance.
    #[must_use]
    pub fn is_not_given(&self) -> bool {
        self.identity == NOT_GIVEN_IDENTITY
    }
}

impl PartialEq for Sentinel {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Sentinel {}

impl Hash for Sentinel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&Sentinel> for bool {
    fn from(sentinel: &Sentinel) -> Self {
        sentinel.is_truthy()
    }
}

impl serde::Serialize for Sentinel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.name)
    }
}

// Deserializing always yields a new instance: same name, same behavior,
// distinct identity.
impl<'de> serde::Deserialize<'de> for Sentinel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(name))
    }
}
