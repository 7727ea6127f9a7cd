//! Field format validation
//!
//! The only business rules the gateway applies before touching the store.

use crate::utils::error::{RbacError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("Invalid email regex")
});

/// Required length of a mobile number
pub const MOBILE_DIGITS: usize = 10;

/// Maximum length of any name column
pub const MAX_NAME_LENGTH: usize = 255;

/// Field validation utilities
pub struct FieldValidator;

impl FieldValidator {
    /// Validate an email address
    pub fn validate_email(email: &str) -> Result<()> {
        if !EMAIL_PATTERN.is_match(email) {
            return Err(RbacError::validation("email format is invalid"));
        }

        Ok(())
    }

    /// Validate a mobile number: exactly ten ASCII digits
    pub fn validate_mobile(mobile: &str) -> Result<()> {
        if mobile.len() != MOBILE_DIGITS || !mobile.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RbacError::validation("mobile format is invalid"));
        }

        Ok(())
    }

    /// Validate a unique name column (user name, role name, access name)
    pub fn validate_name(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(RbacError::validation(format!("{} cannot be empty", field)));
        }

        if value.chars().count() > MAX_NAME_LENGTH {
            return Err(RbacError::validation(format!(
                "{} cannot exceed {} characters",
                field, MAX_NAME_LENGTH
            )));
        }

        Ok(())
    }

    /// Validate a store-generated id supplied by a caller
    pub fn validate_id(field: &str, id: i32) -> Result<()> {
        if id <= 0 {
            return Err(RbacError::validation(format!(
                "{} must be a positive integer",
                field
            )));
        }

        Ok(())
    }
}
