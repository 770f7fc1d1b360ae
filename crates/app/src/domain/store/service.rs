//! Catalog/Order store service.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::{FxHashMap, FxHashSet};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::store::{
    catalog::seed_catalog,
    errors::StoreServiceError,
    models::{Item, NewOrder, Order},
};

/// First order id handed out by the store.
const FIRST_ORDER_ID: u64 = 1;

/// In-memory catalog/order store.
///
/// The catalog is immutable after construction, so reads take no lock. The
/// order map grows behind an [`RwLock`] and order ids come from an atomic
/// counter, so two concurrent checkouts can never be assigned the same id.
#[derive(Debug)]
pub struct InMemoryStoreService {
    items: Vec<Item>,
    item_ids: FxHashSet<u64>,
    orders: RwLock<FxHashMap<u64, Order>>,
    next_order_id: AtomicU64,
}

impl InMemoryStoreService {
    /// Build the store with the seeded catalog and no orders.
    #[must_use]
    pub fn new() -> Self {
        Self::with_items(seed_catalog())
    }

    /// Build the store over an arbitrary catalog.
    ///
    /// Catalog order is the pagination order.
    #[must_use]
    pub fn with_items(items: Vec<Item>) -> Self {
        let item_ids = items.iter().map(|item| item.item_id).collect();

        Self {
            items,
            item_ids,
            orders: RwLock::new(FxHashMap::default()),
            next_order_id: AtomicU64::new(FIRST_ORDER_ID),
        }
    }
}

impl Default for InMemoryStoreService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreService for InMemoryStoreService {
    async fn fetch_items(&self, page_number: usize, page_size: usize) -> Vec<Item> {
        let start = page_number.saturating_sub(1).saturating_mul(page_size);

        if start >= self.items.len() {
            return Vec::new();
        }

        self.items
            .iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect()
    }

    async fn checkout(&self, order: NewOrder) -> Result<u64, StoreServiceError> {
        if !self.item_ids.contains(&order.item_id) {
            return Err(StoreServiceError::ItemNotFound(order.item_id));
        }

        let order_id = self.next_order_id.fetch_add(1, Ordering::Relaxed);

        self.orders
            .write()
            .await
            .insert(order_id, order.into_order(order_id));

        debug!("stored order with order_id: {order_id}");

        Ok(order_id)
    }

    async fn order(&self, order_id: u64) -> Option<Order> {
        self.orders.read().await.get(&order_id).cloned()
    }
}

#[automock]
#[async_trait]
pub trait StoreService: Send + Sync {
    /// Returns one page of the catalog.
    ///
    /// The page window is `[(page_number - 1) * page_size, start + page_size)`
    /// clamped to the catalog length; a start offset past the end yields an
    /// empty page rather than an error. Callers validate that `page_number`
    /// and `page_size` are at least 1.
    async fn fetch_items(&self, page_number: usize, page_size: usize) -> Vec<Item>;

    /// Validates the referenced item, assigns the next sequential order id
    /// and stores the order under it.
    async fn checkout(&self, order: NewOrder) -> Result<u64, StoreServiceError>;

    /// Looks up a stored order; absence is a [`None`], not an error.
    async fn order(&self, order_id: u64) -> Option<Order>;
}
