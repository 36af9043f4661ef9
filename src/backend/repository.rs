//! Generic table repository
//!
//! One repository per record kind; the table name and default ordering come
//! from `Record::KIND`.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;
use crate::models::{Record, Validate};
use crate::utils::errors::{PortalError, Result};
use super::client::BackendClient;

pub struct TableRepository<R> {
    client: BackendClient,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for TableRepository<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> fmt::Debug for TableRepository<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableRepository")
            .field("table", &R::KIND.table())
            .finish()
    }
}

impl<R: Record> TableRepository<R> {
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            _record: PhantomData,
        }
    }

    pub fn table(&self) -> &'static str {
        R::KIND.table()
    }

    /// Fetch every row of the table
    pub async fn list(&self) -> Result<Vec<R>> {
        let rows = self.client.select(self.table(), R::KIND.default_order()).await?;
        Ok(rows)
    }

    /// Validate and insert a new row
    pub async fn create(&self, request: R::Create) -> Result<R> {
        let request = request.validated()?;
        let record = self.client.insert(self.table(), &request).await?;
        Ok(record)
    }

    /// Validate and patch an existing row
    pub async fn update(&self, id: Uuid, request: R::Update) -> Result<R> {
        let request = request.validated()?;
        self.client
            .update(self.table(), id, &request)
            .await?
            .ok_or_else(|| PortalError::NotFound {
                kind: R::KIND.label(),
                id: id.to_string(),
            })
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.client.delete(self.table(), id).await?;
        Ok(())
    }
}
