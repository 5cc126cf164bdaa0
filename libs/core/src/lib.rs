//! # coretypes
//!
//! Shared core types used across services.
//!
//! - [`NotGivenOr`] and the [`NOT_GIVEN`] sentinel separate "argument omitted"
//!   from "argument explicitly empty"
//! - [`EntityId`] and [`generate_entity_id`] produce sortable ULIDs, falling back
//!   to UUIDs when the `ulid` feature is off
//! - [`Page`] derives pagination metadata from page, page size and total
//! - [`time`] normalizes instants to UTC and the `...Z` ISO-8601 wire format
//! - [`SortOrder`] and [`Environment`] are closed string-backed enumerations
//!
//! Everything here is synchronous and side-effect free apart from reading the
//! clock, the random source and (for [`Environment::from_env`]) the process
//! environment.

mod enums;
mod error;
mod given;
mod macros;
mod pagination;
mod sentinel;
pub mod time;

pub use enums::{Environment, SortOrder, ENVIRONMENT_VAR};
pub use error::ValidationError;
pub use given::{default_or_given, is_given, NotGivenOr};
pub use pagination::Page;
pub use sentinel::{Sentinel, NOT_GIVEN};
pub use time::{
    end_of_day, end_of_today, now_utc, parse_iso, start_of_day, start_of_today, to_iso,
    utc_from_timestamp, IsoPrecision,
};

/// Re-export the id crate for consumers that need the full API.
pub use coretypes_id as id;
pub use coretypes_id::{
    cast_entity_id, generate_entity_id, is_valid_ulid, EntityId, IdError, IdScheme,
};
