//! ID generation schemes and the process-wide scheme selection.

use std::sync::LazyLock;

use crate::{cast_entity_id, EntityId, ULID_LEN};

/// Number of characters in a hyphenated UUID.
pub const UUID_LEN: usize = 36;

static ACTIVE: LazyLock<IdScheme> = LazyLock::new(IdScheme::detect);

/// The format used to generate new entity IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdScheme {
    /// 26-character time-sortable ULID (preferred).
    Ulid,
    /// 36-character hyphenated random v4 UUID.
    Uuid,
}

impl IdScheme {
    /// Returns the scheme selected for this process.
    ///
    /// Selection happens once, on first use.
    #[must_use]
    pub fn active() -> Self {
        *ACTIVE
    }

    fn detect() -> Self {
        let scheme = if ulid_available() {
            IdScheme::Ulid
        } else {
            IdScheme::Uuid
        };

        match scheme {
            IdScheme::Ulid => tracing::debug!(scheme = ?scheme, "entity id scheme selected"),
            IdScheme::Uuid => tracing::warn!(
                scheme = ?scheme,
                "ULID generation unavailable, entity ids fall back to UUIDs"
            ),
        }

        scheme
    }

    /// Returns true for the preferred, sortable scheme.
    #[must_use]
    pub const fn is_sortable(&self) -> bool {
        matches!(self, IdScheme::Ulid)
    }

    /// Returns the length of IDs produced by this scheme.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        match self {
            IdScheme::Ulid => ULID_LEN,
            IdScheme::Uuid => UUID_LEN,
        }
    }

    /// Generates an ID with this scheme.
    ///
    /// Asking for [`IdScheme::Ulid`] when it is not compiled in yields a UUID.
    #[must_use]
    pub fn generate(self) -> EntityId {
        match self {
            IdScheme::Ulid => new_ulid().unwrap_or_else(new_uuid),
            IdScheme::Uuid => new_uuid(),
        }
    }
}

/// Generates a new entity ID using the process-wide scheme.
#[must_use]
pub fn generate_entity_id() -> EntityId {
    IdScheme::active().generate()
}

const fn ulid_available() -> bool {
    cfg!(feature = "ulid")
}

#[cfg(feature = "ulid")]
fn new_ulid() -> Option<EntityId> {
    Some(cast_entity_id(ulid::Ulid::new().to_string()))
}

#[cfg(not(feature = "ulid"))]
fn new_ulid() -> Option<EntityId> {
    None
}

fn new_uuid() -> EntityId {
    cast_entity_id(uuid::Uuid::new_v4().to_string())
}
