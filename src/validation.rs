//! Input validation for food and recipe data.
//!
//! Validation runs before any state change; a failure aborts the operation
//! with nothing persisted.

use crate::error::{LarderError, Result};

/// Maximum allowed length for a food or recipe name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum allowed length for a category.
pub const MAX_CATEGORY_LENGTH: usize = 100;

/// Maximum allowed length for a single ingredient or instruction entry.
pub const MAX_ENTRY_LENGTH: usize = 500;

/// Validates a food or recipe name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(LarderError::Validation("Name cannot be empty".to_string()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(LarderError::Validation(format!(
            "Name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Validates a food category.
pub fn validate_category(category: &str) -> Result<()> {
    if category.trim().is_empty() {
        return Err(LarderError::Validation(
            "Category cannot be empty".to_string(),
        ));
    }
    if category.len() > MAX_CATEGORY_LENGTH {
        return Err(LarderError::Validation(format!(
            "Category exceeds maximum length of {} characters",
            MAX_CATEGORY_LENGTH
        )));
    }
    Ok(())
}

/// Validates a food quantity.
pub fn validate_quantity(quantity: f64) -> Result<()> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(LarderError::Validation(
            "Quantity must be a positive number".to_string(),
        ));
    }
    Ok(())
}

/// Validates a recipe preparation time in minutes.
pub fn validate_time_minutes(minutes: u32) -> Result<()> {
    if minutes == 0 {
        return Err(LarderError::Validation(
            "Preparation time must be a positive number of minutes".to_string(),
        ));
    }
    Ok(())
}

/// Trims entries and drops empties, then requires at least one to remain.
/// Used for both ingredient and instruction lists.
pub fn clean_entries(entries: &[String], what: &str) -> Result<Vec<String>> {
    let cleaned: Vec<String> = entries
        .iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect();
    if cleaned.is_empty() {
        return Err(LarderError::Validation(format!(
            "At least one {} is required",
            what
        )));
    }
    for entry in &cleaned {
        if entry.len() > MAX_ENTRY_LENGTH {
            return Err(LarderError::Validation(format!(
                "{} entry exceeds maximum length of {} characters",
                what, MAX_ENTRY_LENGTH
            )));
        }
    }
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_empty() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_name("Tomato soup").is_ok());
    }

    #[test]
    fn test_validate_name_too_long() {
        let long_name = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_name(&long_name).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1.0).is_ok());
        assert!(validate_quantity(0.25).is_ok());
        assert!(validate_quantity(0.0).is_err());
        assert!(validate_quantity(-2.0).is_err());
        assert!(validate_quantity(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_time_minutes() {
        assert!(validate_time_minutes(30).is_ok());
        assert!(validate_time_minutes(0).is_err());
    }

    #[test]
    fn test_clean_entries_trims_and_drops_empties() {
        let entries = vec![
            "  Eggs ".to_string(),
            "".to_string(),
            "   ".to_string(),
            "Milk".to_string(),
        ];
        let cleaned = clean_entries(&entries, "ingredient").unwrap();
        assert_eq!(cleaned, vec!["Eggs".to_string(), "Milk".to_string()]);
    }

    #[test]
    fn test_clean_entries_requires_one() {
        assert!(clean_entries(&[], "ingredient").is_err());
        assert!(clean_entries(&["   ".to_string()], "instruction").is_err());
    }
}
