//! Executors for the association views

use super::executor::{ApiExecutor, parse_query};
use super::resource::IdQuery;
use crate::core::models::{Access, Role};
use crate::server::state::AppState;
use crate::utils::FieldValidator;
use crate::utils::error::Result;
use actix_web::HttpRequest;
use async_trait::async_trait;

/// `GET /roles/accesses?id=`: accesses granted to a role
pub struct RoleAccessesExecutor {
    role_id: i32,
}

#[async_trait]
impl ApiExecutor for RoleAccessesExecutor {
    type Output = Vec<Access>;

    fn parse_request(req: &HttpRequest, _body: &[u8]) -> Result<Self> {
        let role_id = parse_query::<IdQuery>(req)?.id;
        Ok(Self { role_id })
    }

    fn validate_request(&self) -> Result<()> {
        FieldValidator::validate_id("id", self.role_id)
    }

    async fn run(self, state: &AppState) -> Result<Vec<Access>> {
        state.resolver.role_accesses_for_role(self.role_id).await
    }
}

/// `GET /users/roles?id=`: roles a user currently holds
pub struct UserRolesExecutor {
    user_id: i32,
}

#[async_trait]
impl ApiExecutor for UserRolesExecutor {
    type Output = Vec<Role>;

    fn parse_request(req: &HttpRequest, _body: &[u8]) -> Result<Self> {
        let user_id = parse_query::<IdQuery>(req)?.id;
        Ok(Self { user_id })
    }

    fn validate_request(&self) -> Result<()> {
        FieldValidator::validate_id("id", self.user_id)
    }

    async fn run(self, state: &AppState) -> Result<Vec<Role>> {
        state.resolver.user_roles_for_user(self.user_id).await
    }
}

/// `GET /users/access-names?id=`: distinct access names of a user
pub struct AccessNamesExecutor {
    user_id: i32,
}

#[async_trait]
impl ApiExecutor for AccessNamesExecutor {
    type Output = Vec<String>;

    fn parse_request(req: &HttpRequest, _body: &[u8]) -> Result<Self> {
        let user_id = parse_query::<IdQuery>(req)?.id;
        Ok(Self { user_id })
    }

    fn validate_request(&self) -> Result<()> {
        FieldValidator::validate_id("id", self.user_id)
    }

    async fn run(self, state: &AppState) -> Result<Vec<String>> {
        state.resolver.access_names_for_user(self.user_id).await
    }
}
