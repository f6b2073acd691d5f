//! Volunteer registrations

use chrono::{DateTime, Utc};
use common::filter::normalize_district;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::Listable;
use crate::validation::{optional, required, validate_phone};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub district: String,
    pub address: String,
    pub skills: String,
    pub availability: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listable for Volunteer {
    const TABLE: &'static str = "volunteers";
    const COLUMNS: &'static str = "id, name, phone, district, address, skills, availability, \
                                   notes, status, created_at, updated_at";
    const CATEGORY_COLUMN: Option<&'static str> = None;
    const DEFAULT_LIMIT: u32 = 20;
    const LABEL: &'static str = "Volunteer";
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVolunteerRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub skills: Option<String>,
    pub availability: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVolunteer {
    pub name: String,
    pub phone: String,
    pub district: String,
    pub address: String,
    pub skills: String,
    pub availability: Option<String>,
    pub notes: Option<String>,
}

impl CreateVolunteerRequest {
    pub fn validate(&self) -> Result<NewVolunteer, String> {
        let name = required(self.name.as_deref(), "name")?;
        let phone = required(self.phone.as_deref(), "phone")?;
        validate_phone(&phone)?;
        let district = normalize_district(&required(self.district.as_deref(), "district")?);
        let address = required(self.address.as_deref(), "address")?;
        let skills = required(self.skills.as_deref(), "skills")?;

        Ok(NewVolunteer {
            name,
            phone,
            district,
            address,
            skills,
            availability: optional(self.availability.as_deref()),
            notes: optional(self.notes.as_deref()),
        })
    }
}
