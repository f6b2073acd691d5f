//! Feedback left by site visitors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::validation::{optional, required, validate_phone, validate_rating};

/// Page size for the feedback listing
pub const DEFAULT_LIMIT: u32 = 20;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub message: String,
    pub rating: Option<i16>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub rating: Option<i16>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedback {
    pub name: String,
    pub phone: Option<String>,
    pub message: String,
    pub rating: Option<i16>,
}

impl CreateFeedbackRequest {
    pub fn validate(&self) -> Result<NewFeedback, String> {
        let name = required(self.name.as_deref(), "name")?;
        let message = required(self.message.as_deref(), "message")?;
        let phone = optional(self.phone.as_deref());
        if let Some(phone) = &phone {
            validate_phone(phone)?;
        }
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }

        Ok(NewFeedback {
            name,
            phone,
            message,
            rating: self.rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_is_optional_but_checked_when_present() {
        let mut request = CreateFeedbackRequest {
            name: Some("Nadia".to_string()),
            message: Some("Thank you".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        request.phone = Some("abc".to_string());
        assert!(request.validate().is_err());
    }
}
