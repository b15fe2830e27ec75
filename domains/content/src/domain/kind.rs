//! Per-kind configuration of the resource engine

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Whether a kind stamps `createdAt`/`updatedAt`/`publishedAt`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampPolicy {
    Tracked,
    Untracked,
}

impl TimestampPolicy {
    #[mutants::skip] // Equivalent to comparing against Tracked
    pub fn is_tracked(self) -> bool {
        matches!(self, TimestampPolicy::Tracked)
    }
}

/// A content kind served by the generic resource engine
pub trait ResourceKind: Debug + Clone + Copy + PartialEq + Send + Sync + 'static {
    /// Named attributes of the kind; every one is optional
    type Fields: Serialize + DeserializeOwned + Debug + Clone + PartialEq + Send + Sync + 'static;

    /// Store collection holding documents of this kind
    const COLLECTION: &'static str;

    /// Route prefix, e.g. `/api/v1/blogs`
    const PATH: &'static str;

    /// Display name used in messages, e.g. `Blog`
    const LABEL: &'static str;

    /// Lowercase plural used in listing messages, e.g. `blogs`
    const PLURAL: &'static str;

    const TIMESTAMPS: TimestampPolicy;
}

/// Caller-facing messages for a kind
pub(crate) mod messages {
    use super::ResourceKind;

    pub fn added<K: ResourceKind>() -> String {
        format!("{} added successfully", K::LABEL)
    }

    pub fn updated<K: ResourceKind>() -> String {
        format!("{} updated successfully", K::LABEL)
    }

    pub fn deleted<K: ResourceKind>() -> String {
        format!("{} deleted successfully", K::LABEL)
    }

    pub fn not_found<K: ResourceKind>() -> String {
        format!("{} not found", K::LABEL)
    }

    /// `verb` is one of adding, fetching, updating, deleting
    pub fn failed<K: ResourceKind>(verb: &str) -> String {
        format!("Error {} {}", verb, K::LABEL.to_lowercase())
    }

    pub fn list_failed<K: ResourceKind>() -> String {
        format!("Error fetching {}", K::PLURAL)
    }
}
