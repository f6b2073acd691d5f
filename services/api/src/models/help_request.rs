//! Help requests raised by flood-affected people

use chrono::{DateTime, Utc};
use common::filter::normalize_district;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::{fmt, str::FromStr};
use uuid::Uuid;

use super::Listable;
use crate::validation::{optional, required, validate_phone};

/// Lifecycle of a help request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HelpRequestStatus {
    Pending,
    InProgress,
    Fulfilled,
}

impl HelpRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HelpRequestStatus::Pending => "pending",
            HelpRequestStatus::InProgress => "in-progress",
            HelpRequestStatus::Fulfilled => "fulfilled",
        }
    }
}

impl fmt::Display for HelpRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HelpRequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(HelpRequestStatus::Pending),
            "in-progress" => Ok(HelpRequestStatus::InProgress),
            "fulfilled" => Ok(HelpRequestStatus::Fulfilled),
            other => Err(format!(
                "Invalid status '{}': expected one of pending, in-progress, fulfilled",
                other
            )),
        }
    }
}

/// Help request entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub district: String,
    pub address: String,
    pub needs: String,
    pub category: Option<String>,
    pub people_count: Option<i32>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listable for HelpRequest {
    const TABLE: &'static str = "help_requests";
    const COLUMNS: &'static str = "id, name, phone, district, address, needs, category, \
                                   people_count, notes, status, created_at, updated_at";
    const CATEGORY_COLUMN: Option<&'static str> = Some("category");
    const DEFAULT_LIMIT: u32 = 15;
    const LABEL: &'static str = "Help request";
}

/// Request for raising a help request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHelpRequestRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub needs: Option<String>,
    pub category: Option<String>,
    pub people_count: Option<i32>,
    pub notes: Option<String>,
}

/// Validated help request ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewHelpRequest {
    pub name: String,
    pub phone: String,
    pub district: String,
    pub address: String,
    pub needs: String,
    pub category: Option<String>,
    pub people_count: Option<i32>,
    pub notes: Option<String>,
}

impl CreateHelpRequestRequest {
    pub fn validate(&self) -> Result<NewHelpRequest, String> {
        let name = required(self.name.as_deref(), "name")?;
        let phone = required(self.phone.as_deref(), "phone")?;
        validate_phone(&phone)?;
        let district = normalize_district(&required(self.district.as_deref(), "district")?);
        let address = required(self.address.as_deref(), "address")?;
        let needs = required(self.needs.as_deref(), "needs")?;

        if matches!(self.people_count, Some(count) if count < 1) {
            return Err("peopleCount must be at least 1".to_string());
        }

        Ok(NewHelpRequest {
            name,
            phone,
            district,
            address,
            needs,
            category: optional(self.category.as_deref()),
            people_count: self.people_count,
            notes: optional(self.notes.as_deref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_wire_names() {
        for status in [
            HelpRequestStatus::Pending,
            HelpRequestStatus::InProgress,
            HelpRequestStatus::Fulfilled,
        ] {
            assert_eq!(status.as_str().parse::<HelpRequestStatus>(), Ok(status));
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                serde_json::json!(status.as_str())
            );
        }
    }

    #[test]
    fn test_status_rejects_unknown_and_miscased_values() {
        assert!("done".parse::<HelpRequestStatus>().is_err());
        assert!("Pending".parse::<HelpRequestStatus>().is_err());
        assert!("in_progress".parse::<HelpRequestStatus>().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_people_count() {
        let request = CreateHelpRequestRequest {
            name: Some("Amina".to_string()),
            phone: Some("+8801812345678".to_string()),
            district: Some("Sylhet".to_string()),
            address: Some("Shelter 2".to_string()),
            needs: Some("Drinking water".to_string()),
            people_count: Some(0),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
