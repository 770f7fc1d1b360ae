//! Get Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use storefront_app::domain::store::models::Order;

use crate::{extensions::*, orders::errors::OrderRejection, state::State};

/// Stored order as serialized on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    /// The store-assigned order identifier
    pub order_id: u64,

    /// Catalog id of the ordered item
    pub item_id: u64,

    /// Customer name
    pub full_name: String,

    /// Free-text delivery address
    pub address: Option<String>,

    /// Contact email address
    pub email: String,

    /// Contact phone number
    pub phone_number: String,

    /// Payment card number
    pub credit_card_number: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            order_id: order.order_id,
            item_id: order.item_id,
            full_name: order.full_name,
            address: order.address,
            email: order.email,
            phone_number: order.phone_number,
            credit_card_number: order.credit_card_number,
        }
    }
}

/// Get Order Handler
///
/// Returns a stored order by id.
#[endpoint(tags("orders"), summary = "Get Order with orderId")]
pub(crate) async fn handler(
    order_id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, OrderRejection> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let order_id = order_id.into_inner();

    info!("get order request received for order_id: {order_id}");

    let Some(order) = state.app.store.order(order_id).await else {
        error!("get order request failed as there is no order with order_id: {order_id}");

        return Err(OrderRejection::NotFound);
    };

    Ok(Json(order.into()))
}
