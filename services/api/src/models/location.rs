//! Standalone drop-off locations submitted through the public form

use chrono::{DateTime, Utc};
use common::filter::normalize_district;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::validation::{optional, required, validate_images};

/// Status of a location that appears in listings
pub const STATUS_ACTIVE: &str = "active";

/// Page size for the merged locations listing
pub const DEFAULT_LIMIT: u32 = 20;

/// Location entity
///
/// Schedule fields are opaque strings as entered by the submitter; they are
/// not checked for chronological order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub district: String,
    pub address: String,
    pub description: String,
    pub start_date: Option<String>,
    pub start_time: Option<String>,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    pub images: Vec<String>,
    pub collector_id: Option<Uuid>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request for submitting a location
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationRequest {
    pub name: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub start_time: Option<String>,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    /// Image references produced by the upload service
    #[serde(default)]
    pub images: Vec<String>,
    pub collector_id: Option<Uuid>,
}

/// Validated location ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub name: String,
    pub district: String,
    pub address: String,
    pub description: String,
    pub start_date: Option<String>,
    pub start_time: Option<String>,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    pub images: Vec<String>,
    pub collector_id: Option<Uuid>,
}

impl CreateLocationRequest {
    /// At least one image is mandatory for a public submission
    pub fn validate(&self) -> Result<NewLocation, String> {
        let name = required(self.name.as_deref(), "name")?;
        let district = normalize_district(&required(self.district.as_deref(), "district")?);
        let address = required(self.address.as_deref(), "address")?;
        let description = required(self.description.as_deref(), "description")?;
        let images = validate_images(&self.images, 1)?;

        Ok(NewLocation {
            name,
            district,
            address,
            description,
            start_date: optional(self.start_date.as_deref()),
            start_time: optional(self.start_time.as_deref()),
            end_date: optional(self.end_date.as_deref()),
            end_time: optional(self.end_time.as_deref()),
            images,
            collector_id: self.collector_id,
        })
    }
}
