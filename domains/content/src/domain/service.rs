//! Resource operations with caller-facing outcomes
//!
//! Identifiers arrive as raw strings and are syntax-checked before any store
//! call, so a malformed id is always a validation error and never a lookup.

use chrono::Utc;
use folio_common::{DocumentId, Error, Result, ResultExt};

use crate::domain::entities::{DeleteResult, Resource};
use crate::domain::kind::{messages, ResourceKind};
use crate::repository::ResourceRepository;

#[derive(Clone)]
pub struct ResourceService<K: ResourceKind> {
    repo: ResourceRepository<K>,
}

impl<K: ResourceKind> ResourceService<K> {
    pub fn new(repo: ResourceRepository<K>) -> Self {
        Self { repo }
    }

    /// Create a resource from the given fields
    pub async fn create(&self, fields: K::Fields) -> Result<Resource<K>> {
        let resource = self
            .repo
            .create(fields, Utc::now())
            .await
            .or_internal(&messages::failed::<K>("adding"))?;

        tracing::info!(kind = K::LABEL, id = %resource.id, "Resource created");
        Ok(resource)
    }

    /// Every resource of the kind; empty when there are none
    pub async fn list(&self) -> Result<Vec<Resource<K>>> {
        self.repo
            .list_all()
            .await
            .or_internal(&messages::list_failed::<K>())
    }

    /// Fetch one resource
    pub async fn get(&self, raw_id: &str) -> Result<Resource<K>> {
        let id = DocumentId::parse(raw_id)?;

        self.repo
            .find_by_id(id)
            .await
            .or_internal(&messages::failed::<K>("fetching"))?
            .ok_or_else(|| Error::NotFound(messages::not_found::<K>()))
    }

    /// Replace the fields of an existing resource; never creates one
    pub async fn update(&self, raw_id: &str, fields: K::Fields) -> Result<Resource<K>> {
        let id = DocumentId::parse(raw_id)?;

        let resource = self
            .repo
            .replace(id, fields, Utc::now())
            .await
            .or_internal(&messages::failed::<K>("updating"))?
            .ok_or_else(|| Error::NotFound(messages::not_found::<K>()))?;

        tracing::info!(kind = K::LABEL, id = %resource.id, "Resource updated");
        Ok(resource)
    }

    /// Delete one resource
    pub async fn delete(&self, raw_id: &str) -> Result<DeleteResult> {
        let id = DocumentId::parse(raw_id)?;

        let deleted = self
            .repo
            .delete(id)
            .await
            .or_internal(&messages::failed::<K>("deleting"))?;
        if !deleted {
            return Err(Error::NotFound(messages::not_found::<K>()));
        }

        tracing::info!(kind = K::LABEL, id = %id, "Resource deleted");
        Ok(DeleteResult {
            id,
            deleted_count: 1,
        })
    }
}
