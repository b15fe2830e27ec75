//! HTTP handlers for the Content domain

pub mod resources;
