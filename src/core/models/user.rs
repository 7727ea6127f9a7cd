//! User account model

use crate::utils::FieldValidator;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// A user that roles can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-generated id, `0` until created
    #[serde(default)]
    pub id: i32,
    /// Unique login name
    pub user_name: String,
    /// Ten-digit mobile number
    pub mobile: String,
    /// Email address
    pub email_id: String,
}

impl User {
    /// Create a user that has not been stored yet
    pub fn new(
        user_name: impl Into<String>,
        mobile: impl Into<String>,
        email_id: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            user_name: user_name.into(),
            mobile: mobile.into(),
            email_id: email_id.into(),
        }
    }

    /// Check the format invariants of every field
    pub fn validate(&self) -> Result<()> {
        FieldValidator::validate_name("user name", &self.user_name)?;
        FieldValidator::validate_mobile(&self.mobile)?;
        FieldValidator::validate_email(&self.email_id)?;
        Ok(())
    }
}
