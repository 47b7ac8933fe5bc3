//! Filtering, sorting and pagination of listings
//!
//! Listings are always computed in the same order: filter by name, sort by
//! name, then cut the requested page. Because the page is cut last,
//! [`PaginationMeta::total`] counts the rows that matched the filter and
//! consecutive pages never overlap or skip rows.

use crate::config::PaginationConfig;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Pagination parameters
///
/// Pages start at 1. Out-of-range values are clamped by
/// [`Pagination::normalize`] rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of items per page
    #[serde(default)]
    pub page_size: Option<usize>,
}

fn default_page() -> usize {
    1
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: None,
        }
    }
}

impl Pagination {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size: Some(page_size),
        }
    }

    /// Resolve defaults and clamp to the configured bounds
    ///
    /// Returns `(page, page_size)` with `page >= 1` and
    /// `1 <= page_size <= max_page_size`.
    pub fn normalize(&self, config: &PaginationConfig) -> (usize, usize) {
        let max = config.max_page_size.max(1);
        let size = self
            .page_size
            .unwrap_or(config.default_page_size)
            .clamp(1, max);
        (self.page.max(1), size)
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size);
        let start = (page - 1).saturating_mul(page_size);

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: start.saturating_add(page_size) < total,
            has_prev: page > 1,
        }
    }
}

/// A page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// The paginated data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl<T> Page<T> {
    /// Cut one page out of an already filtered and sorted list
    pub fn slice(items: Vec<T>, page: usize, page_size: usize) -> Self {
        let pagination = PaginationMeta::new(page, page_size, items.len());
        let start = (pagination.page - 1).saturating_mul(pagination.page_size);
        let data = items
            .into_iter()
            .skip(start)
            .take(pagination.page_size)
            .collect();

        Self { data, pagination }
    }

    /// Convert every item, keeping the metadata
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            data: self.data.into_iter().map(f).collect::<Result<_, _>>()?,
            pagination: self.pagination,
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Name filter of a listing
///
/// The filter text is trimmed; blank text means "no filter". A name matches
/// when it equals the filter ignoring case (and surrounding whitespace).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NameFilter {
    #[serde(default)]
    pub name: Option<String>,
}

impl NameFilter {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// The effective filter, lowercased, or `None` when blank
    fn needle(&self) -> Option<String> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_lowercase)
    }

    pub fn is_active(&self) -> bool {
        self.needle().is_some()
    }

    /// Keep the items whose name matches
    pub fn apply<T>(&self, items: Vec<T>, name_of: impl Fn(&T) -> &str) -> Vec<T> {
        match self.needle() {
            None => items,
            Some(needle) => items
                .into_iter()
                .filter(|item| name_of(item).trim().to_lowercase() == needle)
                .collect(),
        }
    }
}

/// Ordering used by every listing: case-insensitive name, then exact name,
/// then the tie-breaker (the storage key)
pub fn by_name<K: Ord>(a: (&str, K), b: (&str, K)) -> Ordering {
    a.0.to_lowercase()
        .cmp(&b.0.to_lowercase())
        .then_with(|| a.0.cmp(b.0))
        .then_with(|| a.1.cmp(&b.1))
}
