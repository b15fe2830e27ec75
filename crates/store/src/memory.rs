//! In-memory document store
//!
//! Keeps every collection in insertion order behind a single mutex, so each
//! call is atomic with respect to every other call. Used by the test suites
//! and by local runs without `DATABASE_URL`.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use folio_common::DocumentId;
use serde_json::Value;

use crate::{key_value, Body, Document, DocumentStore, StoreError, StoreResult};

#[derive(Debug, Default)]
struct MemoryState {
    collections: HashMap<String, Vec<Document>>,
    /// Fields claimed as unique per collection through `insert_unique`
    unique_fields: HashMap<String, BTreeSet<String>>,
    operations: u64,
    unavailable: bool,
}

impl MemoryState {
    fn value_taken(&self, collection: &str, field: &str, value: &str, except: Option<DocumentId>) -> bool {
        self.collections
            .get(collection)
            .map(|docs| {
                docs.iter().any(|doc| {
                    Some(doc.id) != except
                        && matches!(doc.body.get(field), Some(Value::String(v)) if v == value)
                })
            })
            .unwrap_or(false)
    }
}

/// In-memory document store
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store calls made so far
    pub fn operation_count(&self) -> u64 {
        self.state.lock().map(|s| s.operations).unwrap_or(0)
    }

    /// Number of documents currently held in a collection
    pub fn document_count(&self, collection: &str) -> usize {
        self.state
            .lock()
            .map(|s| s.collections.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    /// Make every subsequent call fail as if the backend were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.unavailable = unavailable;
        }
    }

    /// Lock the state and account for one operation
    fn begin(&self) -> StoreResult<MutexGuard<'_, MemoryState>> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;
        state.operations += 1;
        if state.unavailable {
            return Err(StoreError::Unavailable("memory store marked unavailable".to_string()));
        }
        Ok(state)
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: &str, body: Body) -> StoreResult<Document> {
        let mut state = self.begin()?;
        let document = Document {
            id: DocumentId::new(),
            body,
        };
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(document.clone());
        Ok(document)
    }

    async fn insert_unique(
        &self,
        collection: &str,
        key_field: &str,
        body: Body,
    ) -> StoreResult<Document> {
        let value = key_value(&body, key_field)?;
        let mut state = self.begin()?;

        state
            .unique_fields
            .entry(collection.to_string())
            .or_default()
            .insert(key_field.to_string());

        if state.value_taken(collection, key_field, &value, None) {
            return Err(StoreError::Duplicate {
                collection: collection.to_string(),
                field: key_field.to_string(),
            });
        }

        let document = Document {
            id: DocumentId::new(),
            body,
        };
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(document.clone());
        Ok(document)
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let state = self.begin()?;
        Ok(state.collections.get(collection).cloned().unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: DocumentId) -> StoreResult<Option<Document>> {
        let state = self.begin()?;
        Ok(state
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned())
    }

    async fn find_one_by(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> StoreResult<Option<Document>> {
        let state = self.begin()?;
        Ok(state
            .collections
            .get(collection)
            .and_then(|docs| {
                docs.iter()
                    .find(|doc| matches!(doc.body.get(field), Some(Value::String(v)) if v == value))
            })
            .cloned())
    }

    async fn replace(
        &self,
        collection: &str,
        id: DocumentId,
        body: Body,
    ) -> StoreResult<Option<Document>> {
        let mut state = self.begin()?;

        let unique_fields = state
            .unique_fields
            .get(collection)
            .cloned()
            .unwrap_or_default();
        for field in &unique_fields {
            if let Some(Value::String(value)) = body.get(field) {
                if state.value_taken(collection, field, value, Some(id)) {
                    return Err(StoreError::Duplicate {
                        collection: collection.to_string(),
                        field: field.clone(),
                    });
                }
            }
        }

        let Some(existing) = state
            .collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
        else {
            return Ok(None);
        };

        existing.body = body;
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, collection: &str, id: DocumentId) -> StoreResult<bool> {
        let mut state = self.begin()?;
        let Some(docs) = state.collections.get_mut(collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|doc| doc.id != id);
        Ok(docs.len() < before)
    }
}
