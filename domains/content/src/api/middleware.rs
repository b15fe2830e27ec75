//! Content domain state

use std::sync::Arc;

use folio_store::DocumentStore;

use crate::domain::kind::ResourceKind;
use crate::domain::service::ResourceService;
use crate::repository::ResourceRepository;

/// Application state for the Content domain
#[derive(Clone)]
pub struct ContentState {
    pub store: Arc<dyn DocumentStore>,
}

impl ContentState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Service for one content kind over the shared store
    pub fn service<K: ResourceKind>(&self) -> ResourceService<K> {
        ResourceService::new(ResourceRepository::new(Arc::clone(&self.store)))
    }
}
