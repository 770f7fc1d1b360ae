//! App Context

use std::sync::Arc;

use crate::domain::store::{InMemoryStoreService, StoreService};

/// Shared application services.
///
/// Constructed once at startup and handed to request handlers explicitly;
/// there is no global store.
#[derive(Clone)]
pub struct AppContext {
    /// The catalog/order store.
    pub store: Arc<dyn StoreService>,
}

impl AppContext {
    /// Build an application context backed by the in-memory store with the
    /// seeded catalog.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(InMemoryStoreService::new()),
        }
    }
}
