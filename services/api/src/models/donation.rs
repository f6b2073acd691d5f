//! Donation offers posted by donors

use chrono::{DateTime, Utc};
use common::filter::normalize_district;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::Listable;
use crate::validation::{optional, required, validate_phone};

/// Status a donation starts in
pub const DEFAULT_STATUS: &str = "available";

/// Donation entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub district: String,
    pub address: String,
    pub items: String,
    pub category: Option<String>,
    pub quantity: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listable for Donation {
    const TABLE: &'static str = "donations";
    const COLUMNS: &'static str = "id, name, phone, district, address, items, category, quantity, \
                                   notes, status, created_at, updated_at";
    const CATEGORY_COLUMN: Option<&'static str> = Some("category");
    const DEFAULT_LIMIT: u32 = 15;
    const LABEL: &'static str = "Donation";
}

/// Request for posting a donation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub items: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<String>,
    pub notes: Option<String>,
}

/// Validated donation ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonation {
    pub name: String,
    pub phone: String,
    pub district: String,
    pub address: String,
    pub items: String,
    pub category: Option<String>,
    pub quantity: Option<String>,
    pub notes: Option<String>,
}

impl CreateDonationRequest {
    pub fn validate(&self) -> Result<NewDonation, String> {
        let name = required(self.name.as_deref(), "name")?;
        let phone = required(self.phone.as_deref(), "phone")?;
        validate_phone(&phone)?;
        let district = normalize_district(&required(self.district.as_deref(), "district")?);
        let address = required(self.address.as_deref(), "address")?;
        let items = required(self.items.as_deref(), "items")?;

        Ok(NewDonation {
            name,
            phone,
            district,
            address,
            items,
            category: optional(self.category.as_deref()),
            quantity: optional(self.quantity.as_deref()),
            notes: optional(self.notes.as_deref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateDonationRequest {
        CreateDonationRequest {
            name: Some("Karim".to_string()),
            phone: Some("01712345678".to_string()),
            district: Some(" Sunamganj ".to_string()),
            address: Some("Ward 4".to_string()),
            items: Some("Rice, lentils".to_string()),
            category: Some(" ".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_normalizes_district_and_drops_blank_optionals() {
        let donation = request().validate().unwrap();
        assert_eq!(donation.district, "sunamganj");
        assert_eq!(donation.category, None);
    }

    #[test]
    fn test_validate_names_the_missing_field() {
        let mut missing = request();
        missing.items = None;
        assert_eq!(missing.validate(), Err("items is required".to_string()));
    }
}
