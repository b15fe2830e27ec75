//! Domain entities for the Content domain
//!
//! The three content kinds and the generic [`Resource`] they share.

use chrono::{DateTime, Utc};
use folio_common::DocumentId;
use serde::{Deserialize, Serialize};

use crate::domain::kind::{ResourceKind, TimestampPolicy};

/// Lifecycle timestamps of a resource
///
/// `created_at` and `published_at` are fixed at creation; `updated_at` is
/// refreshed by every successful update and never moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: DateTime<Utc>,
}

impl Timestamps {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
            published_at: now,
        }
    }

    /// Timestamps after an update at `now`
    pub fn touched(self, now: DateTime<Utc>) -> Self {
        Self {
            updated_at: now.max(self.updated_at),
            ..self
        }
    }
}

/// A persisted content document of kind `K`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "K::Fields: Serialize"))]
pub struct Resource<K: ResourceKind> {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(flatten)]
    pub fields: K::Fields,
    /// `None` for kinds that do not track timestamps
    #[serde(flatten)]
    pub timestamps: Option<Timestamps>,
}

/// Body of a successful delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub deleted_count: u64,
}

/// Blog post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Blog;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogFields {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ResourceKind for Blog {
    type Fields = BlogFields;

    const COLLECTION: &'static str = "blogs";
    const PATH: &'static str = "/api/v1/blogs";
    const LABEL: &'static str = "Blog";
    const PLURAL: &'static str = "blogs";
    const TIMESTAMPS: TimestampPolicy = TimestampPolicy::Tracked;
}

/// The "about me" profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct About;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutFields {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl ResourceKind for About {
    type Fields = AboutFields;

    const COLLECTION: &'static str = "about";
    const PATH: &'static str = "/api/v1/about";
    const LABEL: &'static str = "About";
    const PLURAL: &'static str = "about";
    const TIMESTAMPS: TimestampPolicy = TimestampPolicy::Untracked;
}

/// Portfolio project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Project;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFields {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sub_title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub git_link: Option<String>,
    #[serde(default)]
    pub demo_link: Option<String>,
}

impl ResourceKind for Project {
    type Fields = ProjectFields;

    const COLLECTION: &'static str = "projects";
    const PATH: &'static str = "/api/v1/projects";
    const LABEL: &'static str = "Project";
    const PLURAL: &'static str = "projects";
    const TIMESTAMPS: TimestampPolicy = TimestampPolicy::Tracked;
}
