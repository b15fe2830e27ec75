//! Repository implementations for the Content domain

pub mod resources;

pub use resources::ResourceRepository;
