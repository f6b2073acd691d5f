//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

/// Most images a location may carry
pub const MAX_IMAGES: usize = 5;

/// Require a non-blank field, returning it trimmed
pub fn required(value: Option<&str>, field: &str) -> Result<String, String> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(format!("{} is required", field)),
    }
}

/// Trim an optional field, dropping it when blank
pub fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Validate a phone number
pub fn validate_phone(phone: &str) -> Result<(), String> {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_REGEX
        .get_or_init(|| Regex::new(r"^\+?[0-9][0-9 \-]{6,19}$").expect("Failed to compile phone regex"));

    if !regex.is_match(phone) {
        return Err("Invalid phone number format".to_string());
    }

    Ok(())
}

/// Validate an image reference list, dropping blank entries
pub fn validate_images(images: &[String], min: usize) -> Result<Vec<String>, String> {
    let images: Vec<String> = images
        .iter()
        .map(|image| image.trim())
        .filter(|image| !image.is_empty())
        .map(str::to_string)
        .collect();

    if images.len() < min {
        return Err(format!("At least {} image(s) required", min));
    }

    if images.len() > MAX_IMAGES {
        return Err(format!("At most {} images allowed", MAX_IMAGES));
    }

    Ok(images)
}

/// Validate a feedback rating
pub fn validate_rating(rating: i16) -> Result<(), String> {
    if !(1..=5).contains(&rating) {
        return Err("Rating must be between 1 and 5".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims_and_rejects_blank() {
        assert_eq!(required(Some("  Rahim "), "name"), Ok("Rahim".to_string()));
        assert_eq!(required(Some("   "), "name"), Err("name is required".to_string()));
        assert_eq!(required(None, "address"), Err("address is required".to_string()));
    }

    #[test]
    fn test_optional_drops_blank() {
        assert_eq!(optional(Some(" rice ")), Some("rice".to_string()));
        assert_eq!(optional(Some("")), None);
        assert_eq!(optional(None), None);
    }

    #[test]
    fn test_phone_formats() {
        assert!(validate_phone("+8801712345678").is_ok());
        assert!(validate_phone("017 1234-5678").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("call me").is_err());
    }

    #[test]
    fn test_image_bounds() {
        let one = vec!["a.jpg".to_string(), " ".to_string()];
        assert_eq!(validate_images(&one, 1), Ok(vec!["a.jpg".to_string()]));
        assert!(validate_images(&[], 1).is_err());
        assert_eq!(validate_images(&[], 0), Ok(vec![]));

        let six: Vec<String> = (0..6).map(|i| format!("{}.jpg", i)).collect();
        assert!(validate_images(&six, 1).is_err());
    }

    #[test]
    fn test_rating_range() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }
}
