//! Education support offers (tutoring, school supplies, classes)

use chrono::{DateTime, Utc};
use common::filter::normalize_district;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::Listable;
use crate::validation::{optional, required, validate_phone};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub district: String,
    pub address: String,
    pub subjects: String,
    pub level: Option<String>,
    pub mode: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listable for Education {
    const TABLE: &'static str = "education_offers";
    const COLUMNS: &'static str = "id, name, phone, district, address, subjects, level, mode, \
                                   notes, status, created_at, updated_at";
    const CATEGORY_COLUMN: Option<&'static str> = Some("level");
    const DEFAULT_LIMIT: u32 = 20;
    const LABEL: &'static str = "Education offer";
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEducationRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub subjects: Option<String>,
    pub level: Option<String>,
    pub mode: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEducation {
    pub name: String,
    pub phone: String,
    pub district: String,
    pub address: String,
    pub subjects: String,
    pub level: Option<String>,
    pub mode: Option<String>,
    pub notes: Option<String>,
}

impl CreateEducationRequest {
    pub fn validate(&self) -> Result<NewEducation, String> {
        let name = required(self.name.as_deref(), "name")?;
        let phone = required(self.phone.as_deref(), "phone")?;
        validate_phone(&phone)?;
        let district = normalize_district(&required(self.district.as_deref(), "district")?);
        let address = required(self.address.as_deref(), "address")?;
        let subjects = required(self.subjects.as_deref(), "subjects")?;

        Ok(NewEducation {
            name,
            phone,
            district,
            address,
            subjects,
            level: optional(self.level.as_deref()),
            mode: optional(self.mode.as_deref()),
            notes: optional(self.notes.as_deref()),
        })
    }
}
