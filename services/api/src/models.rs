//! API models for request and response payloads

use common::{
    filter,
    pagination::{Page, PageRequest},
};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, postgres::PgRow};

pub mod donation;
pub mod education;
pub mod feedback;
pub mod help_request;
pub mod location;
pub mod transport;
pub mod user;
pub mod volunteer;

/// A record type served through the shared list-query
///
/// Every listable table has `id`, `district`, `status` and `created_at`
/// columns; the optional category column is resource specific.
pub trait Listable: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static {
    /// Table the records live in
    const TABLE: &'static str;
    /// Column list for `SELECT`
    const COLUMNS: &'static str;
    /// Column matched by the `category` query parameter, if any
    const CATEGORY_COLUMN: Option<&'static str>;
    /// Page size when the client sends none
    const DEFAULT_LIMIT: u32;
    /// Human readable name used in error messages
    const LABEL: &'static str;
}

/// Raw query parameters for list endpoints
///
/// Everything is a string so that malformed numbers are coerced instead of
/// rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub district: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
}

impl ListQuery {
    pub fn page_request(&self, default_limit: u32) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref(), default_limit)
    }

    pub fn filter(&self) -> ListFilter {
        ListFilter {
            district: filter::district(self.district.as_deref()),
            status: filter::active(self.status.as_deref()).map(str::to_string),
            category: filter::active(self.category.as_deref()).map(str::to_string),
        }
    }
}

/// Constraints that survived sentinel handling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub district: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
}

/// Paginated list body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_requests: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<i64>,
}

impl<T> ListResponse<T> {
    /// Shape used by the resource listings
    pub fn records(page: Page<T>) -> Self {
        Self {
            current_page: page.page,
            total_pages: page.total_pages,
            total_requests: Some(page.total),
            total_items: None,
            data: page.items,
        }
    }

    /// Shape used by the merged locations listing
    pub fn items(page: Page<T>) -> Self {
        Self {
            current_page: page.page,
            total_pages: page.total_pages,
            total_requests: None,
            total_items: Some(page.total),
            data: page.items,
        }
    }
}

/// Body of a status transition request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}
