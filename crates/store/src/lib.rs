//! Document store for Folio
//!
//! Every persisted record is a JSON object addressed by a [`DocumentId`]
//! inside a named collection. Services reach the store only through the
//! [`DocumentStore`] trait; the process opens one store at startup and shares
//! it as `Arc<dyn DocumentStore>`.
//!
//! Two adapters are provided:
//! - [`PgDocumentStore`]: JSONB documents in PostgreSQL
//! - [`MemoryDocumentStore`]: in-process store for tests and local runs

pub mod memory;
pub mod postgres;

use folio_common::DocumentId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// JSON object stored for a document (everything except its id)
pub type Body = Map<String, Value>;

/// Store-specific error types
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Duplicate value for unique field '{field}' in collection '{collection}'")]
    Duplicate { collection: String, field: String },

    #[error("Database error: {0}")]
    Backend(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Corrupt document {id} in collection '{collection}': {reason}")]
    Corrupt {
        collection: String,
        id: DocumentId,
        reason: String,
    },

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// A persisted document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub body: Body,
}

impl Document {
    /// Deserialize the body into a typed value
    pub fn decode<T: DeserializeOwned>(&self, collection: &str) -> StoreResult<T> {
        serde_json::from_value(Value::Object(self.body.clone())).map_err(|e| StoreError::Corrupt {
            collection: collection.to_string(),
            id: self.id,
            reason: e.to_string(),
        })
    }
}

/// Serialize a typed value into a document body
pub fn to_body<T: Serialize>(value: &T) -> StoreResult<Body> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(StoreError::InvalidDocument(format!(
            "document body must be a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(StoreError::InvalidDocument(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Read the string value of a unique key field from a body
pub(crate) fn key_value(body: &Body, field: &str) -> StoreResult<String> {
    match body.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        _ => Err(StoreError::InvalidDocument(format!(
            "unique field '{}' must be a string",
            field
        ))),
    }
}

/// Minimal document store interface
///
/// Each call is a single atomic operation on at most one document; there are
/// no cross-document transactions.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document and assign it a fresh id
    async fn insert(&self, collection: &str, body: Body) -> StoreResult<Document>;

    /// Insert a new document unless another document in the collection holds
    /// the same string value under `key_field`
    async fn insert_unique(
        &self,
        collection: &str,
        key_field: &str,
        body: Body,
    ) -> StoreResult<Document>;

    /// Every document in the collection, in insertion order
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Find a document by id
    async fn find_by_id(&self, collection: &str, id: DocumentId) -> StoreResult<Option<Document>>;

    /// Find the first document whose `field` equals `value`
    async fn find_one_by(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> StoreResult<Option<Document>>;

    /// Replace the body of an existing document; `None` when absent (no upsert)
    async fn replace(
        &self,
        collection: &str,
        id: DocumentId,
        body: Body,
    ) -> StoreResult<Option<Document>>;

    /// Delete a document; `false` when nothing was deleted
    async fn delete(&self, collection: &str, id: DocumentId) -> StoreResult<bool>;
}
