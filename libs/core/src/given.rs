//! Optional parameters that distinguish "not supplied" from "explicitly empty".
//!
//! `Option<T>` conflates an omitted argument with an explicit `None`. Wrapping it
//! as `NotGivenOr<Option<T>>` keeps the two apart:
//!
//! ```
//! use coretypes::{default_or_given, NotGivenOr};
//!
//! fn rename(nickname: NotGivenOr<Option<String>>) -> &'static str {
//!     match nickname {
//!         NotGivenOr::NotGiven => "left unchanged",
//!         NotGivenOr::Given(None) => "cleared",
//!         NotGivenOr::Given(Some(_)) => "replaced",
//!     }
//! }
//!
//! assert_eq!(rename(NotGivenOr::NotGiven), "left unchanged");
//! assert_eq!(rename(NotGivenOr::Given(None)), "cleared");
//! assert_eq!(default_or_given(NotGivenOr::NotGiven, 10), 10);
//! ```
//!
//! For serde payloads, annotate fields with
//! `#[serde(default, skip_serializing_if = "NotGivenOr::is_not_given")]` so an
//! absent key becomes `NotGiven` and a JSON `null` becomes `Given(None)`.

use std::fmt;

use crate::sentinel::{Sentinel, NOT_GIVEN};

/// Either a supplied value or the "not given" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotGivenOr<T> {
    /// The caller did not supply a value.
    NotGiven,
    /// The caller supplied a value, which may itself be empty, zero or `None`.
    Given(T),
}

impl<T> NotGivenOr<T> {
    /// Returns true unless this is `NotGiven`.
    #[must_use]
    pub const fn is_given(&self) -> bool {
        matches!(self, NotGivenOr::Given(_))
    }

    /// Returns true only for `NotGiven`.
    #[must_use]
    pub const fn is_not_given(&self) -> bool {
        matches!(self, NotGivenOr::NotGiven)
    }

    /// Converts to `Option`, mapping `NotGiven` to `None`.
    #[must_use]
    pub fn given(self) -> Option<T> {
        match self {
            NotGivenOr::Given(value) => Some(value),
            NotGivenOr::NotGiven => None,
        }
    }

    /// Borrows the contained value.
    #[must_use]
    pub const fn as_ref(&self) -> NotGivenOr<&T> {
        match self {
            NotGivenOr::Given(value) => NotGivenOr::Given(value),
            NotGivenOr::NotGiven => NotGivenOr::NotGiven,
        }
    }

    /// Maps a given value, leaving `NotGiven` untouched.
    pub fn map<U, F>(self, f: F) -> NotGivenOr<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            NotGivenOr::Given(value) => NotGivenOr::Given(f(value)),
            NotGivenOr::NotGiven => NotGivenOr::NotGiven,
        }
    }

    /// Returns `self` if given, otherwise `other`.
    #[must_use]
    pub fn or(self, other: NotGivenOr<T>) -> NotGivenOr<T> {
        match self {
            NotGivenOr::Given(_) => self,
            NotGivenOr::NotGiven => other,
        }
    }

    /// Returns the given value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            NotGivenOr::Given(value) => value,
            NotGivenOr::NotGiven => default,
        }
    }

    /// Returns the given value or computes one.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            NotGivenOr::Given(value) => value,
            NotGivenOr::NotGiven => f(),
        }
    }

    /// Returns the given value or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }
}

/// Returns true for every value except `NotGiven`.
///
/// `Given(None)`, `Given(0)`, `Given("")`, `Given(false)` and empty collections
/// all count as given.
#[must_use]
pub fn is_given<T>(value: &NotGivenOr<T>) -> bool {
    value.is_given()
}

/// Returns the given value unchanged, or `default` when it was not given.
///
/// Falsy values are never replaced.
pub fn default_or_given<T>(value: NotGivenOr<T>, default: T) -> T {
    value.unwrap_or(default)
}

impl<T> Default for NotGivenOr<T> {
    fn default() -> Self {
        NotGivenOr::NotGiven
    }
}

impl<T> From<T> for NotGivenOr<T> {
    fn from(value: T) -> Self {
        NotGivenOr::Given(value)
    }
}

impl<T> PartialEq<Sentinel> for NotGivenOr<T> {
    fn eq(&self, other: &Sentinel) -> bool {
        self.is_not_given() && other.is_not_given()
    }
}

impl<T: fmt::Display> fmt::Display for NotGivenOr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotGivenOr::Given(value) => fmt::Display::fmt(value, f),
            NotGivenOr::NotGiven => fmt::Display::fmt(&NOT_GIVEN, f),
        }
    }
}

impl<T: serde::Serialize> serde::Serialize for NotGivenOr<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            NotGivenOr::Given(value) => value.serialize(serializer),
            NotGivenOr::NotGiven => serializer.serialize_unit(),
        }
    }
}

// A present value is always `Given`. Absence is handled by `#[serde(default)]`.
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for NotGivenOr<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(NotGivenOr::Given)
    }
}
