//! User model and collector profile locations

use chrono::{DateTime, Utc};
use common::filter::normalize_district;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

use crate::validation::{optional, required, validate_images, validate_phone};

/// Role chosen at registration; immutable afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Donor,
    Collector,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Donor => "donor",
            UserRole::Collector => "collector",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "donor" => Ok(UserRole::Donor),
            "collector" => Ok(UserRole::Collector),
            other => Err(format!(
                "Invalid role '{}': expected donor or collector",
                other
            )),
        }
    }
}

/// A drop-off point embedded in a collector's profile
///
/// `id` and `created_at` are stamped when the entry is first saved; rows
/// written before that carry neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectorProfileLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub district: String,
    pub address: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub role: String,
    pub face_image: Option<String>,
    pub occupation: Option<String>,
    #[sqlx(json)]
    pub locations: Vec<CollectorProfileLocation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_collector(&self) -> bool {
        self.role == UserRole::Collector.as_str()
    }
}

/// Request for user registration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub occupation: Option<String>,
    pub face_image: Option<String>,
}

/// Validated registration
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub phone: String,
    pub role: UserRole,
    pub occupation: Option<String>,
    pub face_image: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<NewUser, String> {
        let name = required(self.name.as_deref(), "name")?;
        let phone = required(self.phone.as_deref(), "phone")?;
        validate_phone(&phone)?;
        let role = required(self.role.as_deref(), "role")?.parse()?;

        Ok(NewUser {
            name,
            phone,
            role,
            occupation: optional(self.occupation.as_deref()),
            face_image: optional(self.face_image.as_deref()),
        })
    }
}

/// One embedded location as sent by the profile editor
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileLocationInput {
    /// Present when editing an entry that was saved before
    pub id: Option<Uuid>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub start_date: Option<String>,
    pub start_time: Option<String>,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Request for a profile update; absent fields are left untouched
///
/// A blank `occupation` or `faceImage` clears the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub occupation: Option<String>,
    pub face_image: Option<String>,
    /// Replaces the whole embedded sequence when present
    pub locations: Option<Vec<ProfileLocationInput>>,
}

/// Validated profile update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    /// `Some(None)` clears the column
    pub occupation: Option<Option<String>>,
    pub face_image: Option<Option<String>>,
    pub locations: Option<Vec<CollectorProfileLocation>>,
}

impl UpdateProfileRequest {
    /// Validate against the stored user
    ///
    /// Only collectors own embedded locations. Entries whose `id` matches a
    /// stored entry keep their original id and creation time; everything else
    /// gets a fresh id stamped with `now`.
    pub fn validate(&self, user: &User, now: DateTime<Utc>) -> Result<ProfileUpdate, String> {
        let name = match self.name.as_deref() {
            Some(name) => Some(required(Some(name), "name")?),
            None => None,
        };

        let locations = match &self.locations {
            Some(_) if !user.is_collector() => {
                return Err("Only collectors can manage collection locations".to_string());
            }
            Some(inputs) => Some(build_locations(&user.locations, inputs, now)?),
            None => None,
        };

        Ok(ProfileUpdate {
            name,
            occupation: self.occupation.as_deref().map(|value| optional(Some(value))),
            face_image: self.face_image.as_deref().map(|value| optional(Some(value))),
            locations,
        })
    }
}

fn build_locations(
    existing: &[CollectorProfileLocation],
    inputs: &[ProfileLocationInput],
    now: DateTime<Utc>,
) -> Result<Vec<CollectorProfileLocation>, String> {
    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            let district = required(input.district.as_deref(), "district")
                .map_err(|e| format!("locations[{}]: {}", index, e))?;
            let address = required(input.address.as_deref(), "address")
                .map_err(|e| format!("locations[{}]: {}", index, e))?;
            let images = validate_images(&input.images, 0)
                .map_err(|e| format!("locations[{}]: {}", index, e))?;

            let previous = input
                .id
                .and_then(|id| existing.iter().find(|entry| entry.id == Some(id)));

            Ok(CollectorProfileLocation {
                id: Some(previous.and_then(|entry| entry.id).unwrap_or_else(Uuid::new_v4)),
                district: normalize_district(&district),
                address,
                start_date: optional(input.start_date.as_deref()),
                start_time: optional(input.start_time.as_deref()),
                end_date: optional(input.end_date.as_deref()),
                end_time: optional(input.end_time.as_deref()),
                images,
                created_at: Some(previous.and_then(|entry| entry.created_at).unwrap_or(now)),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn collector(locations: Vec<CollectorProfileLocation>) -> User {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        User {
            id: Uuid::new_v4(),
            name: "Rafiq".to_string(),
            phone: "01700000000".to_string(),
            role: "collector".to_string(),
            face_image: None,
            occupation: Some("Teacher".to_string()),
            locations,
            created_at: at,
            updated_at: at,
        }
    }

    fn input(id: Option<Uuid>, district: &str) -> ProfileLocationInput {
        ProfileLocationInput {
            id,
            district: Some(district.to_string()),
            address: Some("Union office".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_registration_requires_known_role() {
        let mut request = CreateUserRequest {
            name: Some("Rafiq".to_string()),
            phone: Some("01700000000".to_string()),
            role: Some("admin".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        request.role = Some("collector".to_string());
        assert_eq!(request.validate().unwrap().role, UserRole::Collector);
    }

    #[test]
    fn test_existing_entries_keep_id_and_creation_time() {
        let first_saved = Utc.with_ymd_and_hms(2024, 6, 2, 9, 0, 0).unwrap();
        let kept_id = Uuid::new_v4();
        let user = collector(vec![CollectorProfileLocation {
            id: Some(kept_id),
            district: "sylhet".to_string(),
            address: "Old".to_string(),
            start_date: None,
            start_time: None,
            end_date: None,
            end_time: None,
            images: vec![],
            created_at: Some(first_saved),
        }]);

        let now = Utc.with_ymd_and_hms(2024, 6, 5, 9, 0, 0).unwrap();
        let request = UpdateProfileRequest {
            locations: Some(vec![input(Some(kept_id), "Sylhet"), input(None, " Habiganj ")]),
            ..Default::default()
        };

        let update = request.validate(&user, now).unwrap();
        let locations = update.locations.unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].id, Some(kept_id));
        assert_eq!(locations[0].created_at, Some(first_saved));
        assert_eq!(locations[1].district, "habiganj");
        assert_eq!(locations[1].created_at, Some(now));
        assert_ne!(locations[1].id, Some(kept_id));
    }

    #[test]
    fn test_donors_cannot_own_locations() {
        let mut donor = collector(vec![]);
        donor.role = "donor".to_string();

        let request = UpdateProfileRequest {
            locations: Some(vec![input(None, "Sylhet")]),
            ..Default::default()
        };
        assert!(request.validate(&donor, Utc::now()).is_err());
    }

    #[test]
    fn test_location_errors_point_at_the_entry() {
        let request = UpdateProfileRequest {
            locations: Some(vec![input(None, "Sylhet"), input(None, "")]),
            ..Default::default()
        };
        assert_eq!(
            request.validate(&collector(vec![]), Utc::now()),
            Err("locations[1]: district is required".to_string())
        );
    }

    #[test]
    fn test_blank_optional_fields_clear_and_absent_ones_keep() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"occupation":"  ","faceImage":"me.jpg"}"#).unwrap();
        let update = request.validate(&collector(vec![]), Utc::now()).unwrap();
        assert_eq!(update.occupation, Some(None));
        assert_eq!(update.face_image, Some(Some("me.jpg".to_string())));
        assert_eq!(update.name, None);

        let untouched = UpdateProfileRequest::default()
            .validate(&collector(vec![]), Utc::now())
            .unwrap();
        assert_eq!(untouched.occupation, None);
        assert_eq!(untouched.face_image, None);
        assert_eq!(untouched.locations, None);
    }

    #[test]
    fn test_legacy_embedded_rows_deserialize() {
        let legacy: CollectorProfileLocation =
            serde_json::from_str(r#"{"district":"Sunamganj","address":"Bazar"}"#).unwrap();
        assert_eq!(legacy.id, None);
        assert!(legacy.images.is_empty());
        assert_eq!(legacy.created_at, None);
    }
}
