//! Closed string-backed enumerations shared across services.
//!
//! The tokens (`"asc"`, `"desc"`, `"dev"`, `"staging"`, `"production"`) are the
//! wire representation.

use std::cmp::Ordering;
use std::env::{self, VarError};

use crate::string_enum;
use crate::ValidationError;

/// Environment variable read by [`Environment::from_env`].
pub const ENVIRONMENT_VAR: &str = "CORETYPES_ENV";

string_enum! {
    /// Sort direction for list queries.
    #[derive(Default)]
    pub enum SortOrder {
        /// Ascending.
        #[default]
        Asc => "asc",
        /// Descending.
        Desc => "desc",
    }
}

impl SortOrder {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Applies this direction to an ascending comparison result.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

string_enum! {
    /// Deployment environment.
    #[derive(Default)]
    pub enum Environment {
        #[default]
        Development => "dev",
        Staging => "staging",
        Production => "production",
    }
}

impl Environment {
    /// Reads the environment from `CORETYPES_ENV`.
    ///
    /// Unset means [`Environment::Development`]. A set but unknown value is an error.
    pub fn from_env() -> Result<Self, ValidationError> {
        match env::var(ENVIRONMENT_VAR) {
            Ok(value) => Self::resolve(Some(&value)),
            Err(VarError::NotPresent) => Self::resolve(None),
            Err(VarError::NotUnicode(_)) => Err(ValidationError::InvalidEnvVar {
                var: ENVIRONMENT_VAR,
                reason: "value is not valid unicode".to_string(),
            }),
        }
    }

    /// Like [`Environment::from_env`], but falls back to `default` on any error.
    #[must_use]
    pub fn from_env_or(default: Self) -> Self {
        Self::from_env().unwrap_or_else(|err| {
            tracing::warn!(error = %err, fallback = %default, "ignoring invalid environment");
            default
        })
    }

    fn resolve(raw: Option<&str>) -> Result<Self, ValidationError> {
        let env = match raw.map(str::trim) {
            None | Some("") => Self::default(),
            Some(token) => Self::parse(token)?,
        };
        tracing::debug!(environment = %env, "resolved environment");
        Ok(env)
    }

    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}
