//! HTTP response handling for errors

use super::types::RbacError;
use crate::server::routes::ApiResponse;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

/// Client message used for every server-side failure
pub const INTERNAL_CLIENT_MESSAGE: &str = "an error occurred while processing the request";

/// Structured error list carried by the response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorList {
    /// Message safe to show to the client
    pub client_message: String,
    /// Individual errors
    pub errors: Vec<ErrorDetail>,
}

/// Error detail structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl RbacError {
    /// HTTP status for this error kind
    pub fn http_status(&self) -> StatusCode {
        match self {
            RbacError::Validation(_) => StatusCode::BAD_REQUEST,
            RbacError::NotFound(_) => StatusCode::NOT_FOUND,
            RbacError::ConstraintViolation(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build the envelope error list. Server-side failures never expose
    /// driver or internal text.
    pub fn to_error_list(&self) -> ErrorList {
        if self.is_client_error() {
            let message = self.to_string();
            return ErrorList {
                client_message: message.clone(),
                errors: vec![ErrorDetail {
                    code: self.code().to_string(),
                    message,
                }],
            };
        }

        let message = match self {
            RbacError::Database(_) => "Database operation failed",
            RbacError::Integrity(_) => "Stored associations are inconsistent",
            _ => "An internal error occurred",
        };

        ErrorList {
            client_message: INTERNAL_CLIENT_MESSAGE.to_string(),
            errors: vec![ErrorDetail {
                code: self.code().to_string(),
                message: message.to_string(),
            }],
        }
    }
}

impl ResponseError for RbacError {
    fn status_code(&self) -> StatusCode {
        self.http_status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.http_status()).json(ApiResponse::<()>::from_error(self))
    }
}
