//! Transport offers: boats, trucks and vans available for relief runs

use chrono::{DateTime, Utc};
use common::filter::normalize_district;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::Listable;
use crate::validation::{optional, required, validate_phone};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transport {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub district: String,
    pub address: String,
    pub vehicle_type: String,
    pub capacity: Option<String>,
    pub route: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listable for Transport {
    const TABLE: &'static str = "transport_offers";
    const COLUMNS: &'static str = "id, name, phone, district, address, vehicle_type, capacity, \
                                   route, notes, status, created_at, updated_at";
    const CATEGORY_COLUMN: Option<&'static str> = Some("vehicle_type");
    const DEFAULT_LIMIT: u32 = 20;
    const LABEL: &'static str = "Transport offer";
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransportRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub vehicle_type: Option<String>,
    pub capacity: Option<String>,
    pub route: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTransport {
    pub name: String,
    pub phone: String,
    pub district: String,
    pub address: String,
    pub vehicle_type: String,
    pub capacity: Option<String>,
    pub route: Option<String>,
    pub notes: Option<String>,
}

impl CreateTransportRequest {
    pub fn validate(&self) -> Result<NewTransport, String> {
        let name = required(self.name.as_deref(), "name")?;
        let phone = required(self.phone.as_deref(), "phone")?;
        validate_phone(&phone)?;
        let district = normalize_district(&required(self.district.as_deref(), "district")?);
        let address = required(self.address.as_deref(), "address")?;
        let vehicle_type = required(self.vehicle_type.as_deref(), "vehicleType")?;

        Ok(NewTransport {
            name,
            phone,
            district,
            address,
            vehicle_type,
            capacity: optional(self.capacity.as_deref()),
            route: optional(self.route.as_deref()),
            notes: optional(self.notes.as_deref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_vehicle_type_uses_wire_name() {
        let request = CreateTransportRequest {
            name: Some("Boat club".to_string()),
            phone: Some("01911223344".to_string()),
            district: Some("Sylhet".to_string()),
            address: Some("Ghat road".to_string()),
            ..Default::default()
        };
        assert_eq!(request.validate(), Err("vehicleType is required".to_string()));
    }
}
