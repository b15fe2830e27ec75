//! Document identifiers
//!
//! Identifiers are assigned by the store and accepted from callers only as
//! path parameters. `DocumentId::parse` is the syntax check every by-id
//! operation runs before the store is touched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Message returned for identifiers that fail the syntax check
pub const INVALID_ID_MESSAGE: &str = "Invalid id format";

/// Opaque, store-assigned document identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        DocumentId(Uuid::new_v4())
    }

    /// Parse a caller-supplied identifier
    pub fn parse(raw: &str) -> Result<Self> {
        Uuid::try_parse(raw)
            .map(DocumentId)
            .map_err(|_| Error::Validation(INVALID_ID_MESSAGE.to_string()))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    #[mutants::skip] // Delegates to DocumentId::new()
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for DocumentId {
    fn from(id: Uuid) -> Self {
        DocumentId(id)
    }
}

impl FromStr for DocumentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DocumentId::parse(s)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
