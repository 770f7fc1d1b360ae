//! Seed Catalog

use rust_decimal::Decimal;

use crate::domain::store::models::Item;

/// Number of items in the seed catalog.
pub const SEED_CATALOG_SIZE: u64 = 10;

/// Build the deterministic seed catalog: items `1..=10` with synthetic
/// fields derived from the item id.
///
/// Insertion order is item-id order, which is also the pagination order.
#[must_use]
pub fn seed_catalog() -> Vec<Item> {
    (1..=SEED_CATALOG_SIZE)
        .map(|i| Item {
            item_id: i,
            image_url: format!("https://img.com/img{i}"),
            name: format!("item{i}"),
            description: format!("item description{i}"),
            price: Decimal::from(1000 * i),
            discount_percentage: (2 * i) as f32,
        })
        .collect()
}
