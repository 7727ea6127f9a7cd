//! Entity store interface
//!
//! One implementation per record type. Creation fills in store-generated ids,
//! updates address the record by its key and fail with `NotFound` when no
//! row matches, deletes are idempotent and listings come back in key order.

use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt::Display;

/// CRUD persistence for a single record type
#[async_trait]
pub trait EntityStore<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// Key addressing one stored record
    type Key: Copy + Display + Send + Sync + 'static;

    /// Insert a new record, writing any generated id back into it
    async fn create(&self, record: &mut T) -> Result<()>;

    /// Fetch the record stored under `key`
    async fn get(&self, key: Self::Key) -> Result<T>;

    /// Overwrite the mutable fields of the record with the same key
    async fn update(&self, record: &T) -> Result<()>;

    /// Remove the record stored under `key`; absent keys are not an error
    async fn delete(&self, key: Self::Key) -> Result<()>;

    /// Every stored record, ordered by key
    async fn get_all(&self) -> Result<Vec<T>>;
}
