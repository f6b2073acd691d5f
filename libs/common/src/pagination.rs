//! Pagination primitives shared by every list endpoint
//!
//! Query-string values arrive as raw strings and are coerced leniently:
//! anything non-numeric or out of range falls back to a safe default
//! instead of failing the request.

use serde::Serialize;

/// Upper bound for a single page
pub const MAX_LIMIT: u32 = 100;

/// A validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-based)
    pub page: u32,
    /// Number of items per page
    pub limit: u32,
}

impl PageRequest {
    /// Coerce raw `page` / `limit` query values
    ///
    /// `page` below 1 or unparsable becomes 1, `limit` below 1 or unparsable
    /// becomes `default_limit`, and `limit` is capped at [`MAX_LIMIT`].
    pub fn from_raw(page: Option<&str>, limit: Option<&str>, default_limit: u32) -> Self {
        let page = parse_positive(page).unwrap_or(1);
        let limit = parse_positive(limit)
            .unwrap_or(default_limit.max(1))
            .min(MAX_LIMIT);

        Self { page, limit }
    }

    /// Number of rows to skip
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.limit as i64
    }

    /// Page count for `total` matching items
    pub fn total_pages(&self, total: i64) -> u32 {
        if total <= 0 {
            return 0;
        }
        let limit = self.limit as i64;
        ((total + limit - 1) / limit) as u32
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    let value: i64 = raw?.trim().parse().ok()?;
    if value < 1 {
        return None;
    }
    Some(value.min(u32::MAX as i64) as u32)
}

/// One page of results plus what a client needs to fetch the next one
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Wrap items already sliced by the database
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            items,
            page: request.page,
            limit: request.limit,
            total,
            total_pages: request.total_pages(total),
        }
    }

    /// Slice an in-memory sequence
    ///
    /// Pages past the end yield an empty `items` with the correct totals.
    pub fn from_vec(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len() as i64;
        let start = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let items = all
            .into_iter()
            .skip(start)
            .take(request.limit as usize)
            .collect();

        Self::new(items, total, request)
    }
}
