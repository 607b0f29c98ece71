//! Page bounds and the pagination block returned with list responses.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Pagination metadata attached to every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Build the metadata for `page` of `total` rows split into pages of `limit`.
    ///
    /// A `limit` of zero yields zero pages rather than dividing by zero.
    pub fn new(total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit))
        };
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: u64::from(page) < total_pages,
            has_prev: page > 1,
        }
    }

    /// Row offset of the first item on the page.
    pub fn offset(page: u32, limit: u32) -> usize {
        (page.saturating_sub(1) as usize).saturating_mul(limit as usize)
    }
}

/// One page of rows with the bounds that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Bring client supplied paging into range.
///
/// A page below 1 becomes 1; a limit below 1 or above [`MAX_LIMIT`] becomes
/// [`DEFAULT_LIMIT`].
pub fn clamp_page_limit(page: i64, limit: i64) -> (u32, u32) {
    let page = if page < 1 {
        DEFAULT_PAGE
    } else {
        u32::try_from(page).unwrap_or(u32::MAX)
    };
    let limit = if limit < 1 || limit > i64::from(MAX_LIMIT) {
        DEFAULT_LIMIT
    } else {
        // In range 1..=MAX_LIMIT, so the conversion cannot fail.
        u32::try_from(limit).unwrap_or(DEFAULT_LIMIT)
    };
    (page, limit)
}

/// Parse a `page` or `limit` query value, falling back to `default` when it
/// is missing or not a number.
pub fn parse_query_number(raw: Option<&str>, default: u32) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(i64::from(default))
}
