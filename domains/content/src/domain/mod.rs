//! Domain layer for the Content domain

pub mod entities;
pub mod kind;
pub mod service;
