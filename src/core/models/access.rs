//! Access (permission) model

use crate::utils::FieldValidator;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// A single named permission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Access {
    #[serde(default)]
    pub id: i32,
    pub name: String,
}

impl Access {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        FieldValidator::validate_name("access name", &self.name)
    }
}
