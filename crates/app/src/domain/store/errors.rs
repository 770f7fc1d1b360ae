//! Store service errors.

use thiserror::Error;

/// Failures surfaced by the catalog/order store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreServiceError {
    /// Checkout referenced an item id missing from the catalog.
    ///
    /// The display form is the exact text the HTTP boundary returns.
    #[error("Item Not found with id: {0}")]
    ItemNotFound(u64),
}
