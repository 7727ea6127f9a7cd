//! Role model

use crate::utils::FieldValidator;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// A named group of accesses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub id: i32,
    pub name: String,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        FieldValidator::validate_name("role name", &self.name)
    }
}
