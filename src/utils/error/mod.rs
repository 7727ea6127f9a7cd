//! Error handling for the RBAC service
//!
//! This module defines all error types used throughout the service.

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorList, INTERNAL_CLIENT_MESSAGE};
pub use types::{RbacError, Result};
