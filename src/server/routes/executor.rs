//! Request pipeline shared by every route
//!
//! A request goes through four stages: parse, validate, run, render. Each
//! entity operation supplies the stages by implementing [`ApiExecutor`];
//! [`execute`] strings them together and is what actix calls.

use super::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{RbacError, Result};
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// One entity operation exposed over HTTP
#[async_trait]
pub trait ApiExecutor: Sized + Send {
    /// Payload of a successful response
    type Output: Serialize + Send;

    /// Build the executor from the query string and raw body
    fn parse_request(req: &HttpRequest, body: &[u8]) -> Result<Self>;

    /// Check format rules before anything reaches the store
    fn validate_request(&self) -> Result<()>;

    /// Perform the operation
    async fn run(self, state: &AppState) -> Result<Self::Output>;

    /// Wrap the outcome in the response envelope
    fn render_response(outcome: Result<Self::Output>) -> HttpResponse {
        match outcome {
            Ok(data) => ApiResponse::success(data).to_http_response(),
            Err(error) => error.error_response(),
        }
    }
}

/// Generic handler running the four stages of `E`
pub async fn execute<E: ApiExecutor>(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> HttpResponse {
    let outcome = pipeline::<E>(&state, &req, &body).await;

    if let Err(error) = &outcome {
        if error.is_client_error() {
            debug!("{} {} rejected: {}", req.method(), req.path(), error);
        } else {
            warn!("{} {} failed: {}", req.method(), req.path(), error);
        }
    }

    E::render_response(outcome)
}

async fn pipeline<E: ApiExecutor>(
    state: &AppState,
    req: &HttpRequest,
    body: &[u8],
) -> Result<E::Output> {
    let executor = E::parse_request(req, body)?;
    executor.validate_request()?;
    executor.run(state).await
}

/// Deserialize the query string into `Q`
pub(super) fn parse_query<Q: DeserializeOwned>(req: &HttpRequest) -> Result<Q> {
    web::Query::<Q>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .map_err(|e| RbacError::validation(format!("invalid query parameters: {}", e)))
}

/// Deserialize a JSON body; an empty body reads as `{}`
pub(super) fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };

    serde_json::from_slice(body)
        .map_err(|e| RbacError::validation(format!("invalid JSON body: {}", e)))
}
