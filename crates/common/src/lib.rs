//! Shared utilities, configuration, and error handling for Folio
//!
//! This crate provides common functionality used across the Folio backend:
//! - Configuration management following 12-factor principles
//! - The error taxonomy and its mapping onto the JSON response envelope
//! - Document identifiers and their syntax check
//! - A JSON body extractor that reports malformed bodies through the envelope

pub mod config;
pub mod error;
pub mod extractors;
pub mod id;
pub mod response;

pub use config::{Config, LogFormat};
pub use error::{Error, Result, ResultExt};
pub use extractors::JsonBody;
pub use id::DocumentId;
pub use response::{ApiResponse, ErrorBody};
