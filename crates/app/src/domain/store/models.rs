//! Store Models

use rust_decimal::Decimal;

/// Catalog Item Model
///
/// A read-only catalog entry available for ordering. Items are seeded once
/// at store construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub item_id: u64,
    pub image_url: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub discount_percentage: f32,
}

/// Order Model
///
/// A stored customer purchase request referencing exactly one [`Item`].
/// Orders are never mutated or deleted after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: u64,
    pub item_id: u64,
    pub full_name: String,
    pub address: Option<String>,
    pub email: String,
    pub phone_number: String,
    pub credit_card_number: String,
}

/// New Order Model
///
/// Checkout input; the store assigns the order id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub item_id: u64,
    pub full_name: String,
    pub address: Option<String>,
    pub email: String,
    pub phone_number: String,
    pub credit_card_number: String,
}

impl NewOrder {
    /// Attach an assigned order id, producing the stored record.
    #[must_use]
    pub fn into_order(self, order_id: u64) -> Order {
        Order {
            order_id,
            item_id: self.item_id,
            full_name: self.full_name,
            address: self.address,
            email: self.email,
            phone_number: self.phone_number,
            credit_card_number: self.credit_card_number,
        }
    }
}
