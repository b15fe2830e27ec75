//! Content domain: one generic CRUD engine for blogs, about profiles, projects
//!
//! Each content kind is a marker type implementing [`ResourceKind`], which
//! names its collection, its field schema and its timestamp policy. The
//! repository, service and handlers are written once over `K: ResourceKind`.

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{
    About, AboutFields, Blog, BlogFields, DeleteResult, Project, ProjectFields, Resource,
    Timestamps,
};
pub use domain::kind::{ResourceKind, TimestampPolicy};
pub use domain::service::ResourceService;

// Re-export repository types
pub use repository::ResourceRepository;

// Re-export API types
pub use api::routes;
pub use api::ContentState;
