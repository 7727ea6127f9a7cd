//! HTTP route modules
//!
//! Every route is served by the generic [`executor::execute`] pipeline,
//! instantiated with the executor for that entity and operation.

pub mod crud;
pub mod executor;
pub mod resolver;
pub mod resource;

use crate::core::models::{Access, Role, RoleAccess, User, UserRole};
use crate::server::handlers::health_check;
use crate::utils::error::{ErrorList, RbacError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crud::{CreateExecutor, DeleteExecutor, GetExecutor, ListExecutor, UpdateExecutor};
use executor::execute;
use resolver::{AccessNamesExecutor, RoleAccessesExecutor, UserRolesExecutor};
use resource::Resource;

/// Prefix shared by every entity route
pub const API_PREFIX: &str = "/api/v1";

/// Uniform response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// HTTP status code, repeated in the body
    pub status_code: u16,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error list (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorList>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            data: Some(data),
            error: None,
        }
    }

    /// Convert the API response to an HTTP response with the carried status
    pub fn to_http_response(&self) -> HttpResponse {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(self)
    }
}

impl ApiResponse<()> {
    /// Create an error response
    pub fn from_error(error: &RbacError) -> Self {
        Self {
            status_code: error.http_status().as_u16(),
            data: None,
            error: Some(error.to_error_list()),
        }
    }
}

/// Register the health check, the CRUD routes of all five entities and the
/// resolver views.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope(API_PREFIX)
            // resolver views first so they are not shadowed by entity scopes
            .route(
                "/roles/accesses",
                web::get().to(execute::<RoleAccessesExecutor>),
            )
            .route("/users/roles", web::get().to(execute::<UserRolesExecutor>))
            .route(
                "/users/access-names",
                web::get().to(execute::<AccessNamesExecutor>),
            )
            .service(crud_scope::<User>("/users"))
            .service(crud_scope::<Role>("/roles"))
            .service(crud_scope::<Access>("/accesses"))
            .service(crud_scope::<UserRole>("/user-roles"))
            .service(crud_scope::<RoleAccess>("/role-accesses")),
    );
}

fn crud_scope<R>(path: &str) -> actix_web::Scope
where
    R: Resource,
    crate::storage::Database: crate::storage::EntityStore<R, Key = R::Key>,
{
    web::scope(path)
        .route("/create", web::post().to(execute::<CreateExecutor<R>>))
        .route("/get", web::get().to(execute::<GetExecutor<R>>))
        .route("/update", web::put().to(execute::<UpdateExecutor<R>>))
        .route("/delete", web::delete().to(execute::<DeleteExecutor<R>>))
        .route("/list", web::get().to(execute::<ListExecutor<R>>))
}
