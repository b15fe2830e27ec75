//! Generic resource repository
//!
//! Stores a resource as one document whose body is the kind's fields plus,
//! for tracked kinds, its timestamps.

use std::marker::PhantomData;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use folio_common::DocumentId;
use folio_store::{to_body, Document, DocumentStore, StoreResult};
use serde::Serialize;

use crate::domain::entities::{Resource, Timestamps};
use crate::domain::kind::ResourceKind;

const CREATED_AT: &str = "createdAt";

/// Persisted body of a resource
#[derive(Serialize)]
#[serde(bound(serialize = "K::Fields: Serialize"))]
struct StoredResource<'a, K: ResourceKind> {
    #[serde(flatten)]
    fields: &'a K::Fields,
    #[serde(flatten)]
    timestamps: Option<Timestamps>,
}

#[derive(Clone)]
pub struct ResourceRepository<K: ResourceKind> {
    store: Arc<dyn DocumentStore>,
    kind: PhantomData<K>,
}

impl<K: ResourceKind> ResourceRepository<K> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            kind: PhantomData,
        }
    }

    fn decode(document: Document) -> StoreResult<Resource<K>> {
        let fields = document.decode::<K::Fields>(K::COLLECTION)?;
        // Documents written before timestamps were tracked have none
        let timestamps = if K::TIMESTAMPS.is_tracked() && document.body.contains_key(CREATED_AT) {
            Some(document.decode::<Timestamps>(K::COLLECTION)?)
        } else {
            None
        };

        Ok(Resource {
            id: document.id,
            fields,
            timestamps,
        })
    }

    fn encode(fields: &K::Fields, timestamps: Option<Timestamps>) -> StoreResult<folio_store::Body> {
        to_body(&StoredResource::<K> { fields, timestamps })
    }

    /// Persist a new resource created at `now`
    pub async fn create(&self, fields: K::Fields, now: DateTime<Utc>) -> StoreResult<Resource<K>> {
        let timestamps = K::TIMESTAMPS.is_tracked().then(|| Timestamps::new(now));
        let body = Self::encode(&fields, timestamps)?;
        let document = self.store.insert(K::COLLECTION, body).await?;

        Ok(Resource {
            id: document.id,
            fields,
            timestamps,
        })
    }

    /// Every resource of the kind in store order
    pub async fn list_all(&self) -> StoreResult<Vec<Resource<K>>> {
        self.store
            .find_all(K::COLLECTION)
            .await?
            .into_iter()
            .map(Self::decode)
            .collect()
    }

    /// Find resource by ID
    pub async fn find_by_id(&self, id: DocumentId) -> StoreResult<Option<Resource<K>>> {
        self.store
            .find_by_id(K::COLLECTION, id)
            .await?
            .map(Self::decode)
            .transpose()
    }

    /// Replace the fields of an existing resource updated at `now`
    ///
    /// Returns `None` without writing when the resource does not exist.
    /// Creation and publication times are carried over from the stored copy.
    pub async fn replace(
        &self,
        id: DocumentId,
        fields: K::Fields,
        now: DateTime<Utc>,
    ) -> StoreResult<Option<Resource<K>>> {
        let timestamps = if K::TIMESTAMPS.is_tracked() {
            let Some(existing) = self.find_by_id(id).await? else {
                return Ok(None);
            };
            Some(existing.timestamps.unwrap_or_else(|| Timestamps::new(now)).touched(now))
        } else {
            None
        };

        let body = Self::encode(&fields, timestamps)?;
        self.store
            .replace(K::COLLECTION, id, body)
            .await?
            .map(Self::decode)
            .transpose()
    }

    /// Delete a resource; `false` when nothing was deleted
    pub async fn delete(&self, id: DocumentId) -> StoreResult<bool> {
        self.store.delete(K::COLLECTION, id).await
    }
}
