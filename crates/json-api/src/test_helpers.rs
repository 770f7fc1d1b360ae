//! Test helpers.

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use serde_json::json;

use storefront_app::{
    context::AppContext,
    domain::store::{
        MockStoreService,
        models::{Item, Order},
    },
};

use crate::{router::app_router, state::State};

pub(crate) fn make_item(item_id: u64) -> Item {
    Item {
        item_id,
        image_url: format!("https://img.com/img{item_id}"),
        name: format!("item{item_id}"),
        description: format!("item description{item_id}"),
        price: Decimal::from(1000 * item_id),
        discount_percentage: (2 * item_id) as f32,
    }
}

pub(crate) fn make_order(order_id: u64, item_id: u64) -> Order {
    Order {
        order_id,
        item_id,
        full_name: "Naveen Kandagatla".to_string(),
        address: Some("Bangalore,India".to_string()),
        email: "test@gmail.com".to_string(),
        phone_number: "123-456-7890".to_string(),
        credit_card_number: "1234567891234567891".to_string(),
    }
}

/// A checkout payload passing every field rule.
pub(crate) fn valid_checkout_body(item_id: u64) -> serde_json::Value {
    json!({
        "itemId": item_id,
        "fullName": "Naveen Kandagatla",
        "address": "Bangalore,India",
        "email": "test@gmail.com",
        "phoneNumber": "123-456-7890",
        "creditCardNumber": "1234567891234567891",
    })
}

pub(crate) fn state_with_store(store: MockStoreService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        store: Arc::new(store),
    }))
}

/// Service over the real app router with a mocked store.
pub(crate) fn store_service(store: MockStoreService) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_store(store)))
            .push(app_router()),
    )
}

/// Service over the real app router with the seeded in-memory store.
pub(crate) fn seeded_service() -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(AppContext::in_memory())))
            .push(app_router()),
    )
}
