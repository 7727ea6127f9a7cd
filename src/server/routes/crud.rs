//! Generic CRUD executors
//!
//! One executor per operation, shared by all five record types through
//! [`Resource`].

use super::executor::{ApiExecutor, parse_json, parse_query};
use super::resource::Resource;
use crate::server::state::AppState;
use crate::storage::{Database, EntityStore};
use crate::utils::error::Result;
use actix_web::HttpRequest;
use async_trait::async_trait;
use tracing::debug;

/// `POST …/create`
pub struct CreateExecutor<R: Resource> {
    record: R,
}

#[async_trait]
impl<R> ApiExecutor for CreateExecutor<R>
where
    R: Resource,
    Database: EntityStore<R, Key = R::Key>,
{
    type Output = R;

    fn parse_request(_req: &HttpRequest, body: &[u8]) -> Result<Self> {
        let payload = parse_json::<R::CreatePayload>(body)?;
        Ok(Self {
            record: R::from_create(payload),
        })
    }

    fn validate_request(&self) -> Result<()> {
        self.record.validate()
    }

    async fn run(mut self, state: &AppState) -> Result<R> {
        debug!("Creating {}", R::NAME);
        <Database as EntityStore<R>>::create(&state.storage, &mut self.record).await?;
        Ok(self.record)
    }
}

/// `GET …/get`
pub struct GetExecutor<R: Resource> {
    key: R::Key,
}

#[async_trait]
impl<R> ApiExecutor for GetExecutor<R>
where
    R: Resource,
    Database: EntityStore<R, Key = R::Key>,
{
    type Output = R;

    fn parse_request(req: &HttpRequest, _body: &[u8]) -> Result<Self> {
        let key = R::key_from_query(parse_query::<R::KeyQuery>(req)?);
        Ok(Self { key })
    }

    fn validate_request(&self) -> Result<()> {
        R::validate_key(&self.key)
    }

    async fn run(self, state: &AppState) -> Result<R> {
        debug!("Fetching {} {}", R::NAME, self.key);
        <Database as EntityStore<R>>::get(&state.storage, self.key).await
    }
}

/// `PUT …/update`; the key comes from the query string, the new field
/// values from the body.
pub struct UpdateExecutor<R: Resource> {
    key: R::Key,
    record: R,
}

#[async_trait]
impl<R> ApiExecutor for UpdateExecutor<R>
where
    R: Resource,
    Database: EntityStore<R, Key = R::Key>,
{
    type Output = R;

    fn parse_request(req: &HttpRequest, body: &[u8]) -> Result<Self> {
        let key = R::key_from_query(parse_query::<R::KeyQuery>(req)?);
        let payload = parse_json::<R::UpdatePayload>(body)?;
        Ok(Self {
            key,
            record: R::from_update(key, payload),
        })
    }

    fn validate_request(&self) -> Result<()> {
        R::validate_key(&self.key)?;
        self.record.validate()
    }

    async fn run(self, state: &AppState) -> Result<R> {
        debug!("Updating {}", R::NAME);
        <Database as EntityStore<R>>::update(&state.storage, &self.record).await?;
        Ok(self.record)
    }
}

/// `DELETE …/delete`; answers with the deleted key whether or not a row
/// existed.
pub struct DeleteExecutor<R: Resource> {
    key: R::Key,
}

#[async_trait]
impl<R> ApiExecutor for DeleteExecutor<R>
where
    R: Resource,
    Database: EntityStore<R, Key = R::Key>,
{
    type Output = R::Key;

    fn parse_request(req: &HttpRequest, _body: &[u8]) -> Result<Self> {
        let key = R::key_from_query(parse_query::<R::KeyQuery>(req)?);
        Ok(Self { key })
    }

    fn validate_request(&self) -> Result<()> {
        R::validate_key(&self.key)
    }

    async fn run(self, state: &AppState) -> Result<R::Key> {
        debug!("Deleting {} {}", R::NAME, self.key);
        <Database as EntityStore<R>>::delete(&state.storage, self.key).await?;
        Ok(self.key)
    }
}

/// `GET …/list`
pub struct ListExecutor<R: Resource> {
    _marker: std::marker::PhantomData<fn() -> R>,
}

#[async_trait]
impl<R> ApiExecutor for ListExecutor<R>
where
    R: Resource,
    Database: EntityStore<R, Key = R::Key>,
{
    type Output = Vec<R>;

    fn parse_request(_req: &HttpRequest, _body: &[u8]) -> Result<Self> {
        Ok(Self {
            _marker: std::marker::PhantomData,
        })
    }

    fn validate_request(&self) -> Result<()> {
        Ok(())
    }

    async fn run(self, state: &AppState) -> Result<Vec<R>> {
        <Database as EntityStore<R>>::get_all(&state.storage).await
    }
}
