//! Offset pagination metadata.
//!
//! [`Page`] is a pure calculator over caller-supplied values: it does not check
//! that `items` has `page_size` elements or that they belong to the stated page.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// One page of a query result with derived navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items: Vec<T>,
    page: i64,
    page_size: i64,
    total: i64,
}

impl<T> Page<T> {
    /// Creates a page, validating `page >= 1`, `page_size >= 1` and `total >= 0`.
    pub fn new(
        items: Vec<T>,
        page: i64,
        page_size: i64,
        total: i64,
    ) -> Result<Self, ValidationError> {
        check_min("page", page, 1)?;
        check_min("page_size", page_size, 1)?;
        check_min("total", total, 0)?;

        Ok(Self {
            items,
            page,
            page_size,
            total,
        })
    }

    /// The first page of an empty result.
    pub fn empty(page_size: i64) -> Result<Self, ValidationError> {
        Self::new(Vec::new(), 1, page_size, 0)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    /// Number of rows to skip to reach this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Total number of pages, zero when there are no items at all.
    pub fn total_pages(&self) -> i64 {
        if self.total == 0 {
            return 0;
        }
        self.total / self.page_size + i64::from(self.total % self.page_size != 0)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn previous_page(&self) -> Option<i64> {
        self.has_previous().then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<i64> {
        self.has_next().then(|| self.page + 1)
    }

    /// Transforms the items, keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
        }
    }
}

fn check_min(field: &'static str, actual: i64, min: i64) -> Result<(), ValidationError> {
    if actual < min {
        return Err(ValidationError::BelowMinimum { field, min, actual });
    }
    Ok(())
}

// Derived fields are written out so clients don't recompute them.
impl<T: Serialize> Serialize for Page<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Page", 9)?;
        state.serialize_field("items", &self.items)?;
        state.serialize_field("page", &self.page)?;
        state.serialize_field("page_size", &self.page_size)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("total_pages", &self.total_pages())?;
        state.serialize_field("has_previous", &self.has_previous())?;
        state.serialize_field("has_next", &self.has_next())?;
        state.serialize_field("previous_page", &self.previous_page())?;
        state.serialize_field("next_page", &self.next_page())?;
        state.end()
    }
}

#[derive(Deserialize)]
struct RawPage<T> {
    items: Vec<T>,
    page: i64,
    page_size: i64,
    total: i64,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawPage::<T>::deserialize(deserializer)?;
        Page::new(raw.items, raw.page, raw.page_size, raw.total).map_err(serde::de::Error::custom)
    }
}
