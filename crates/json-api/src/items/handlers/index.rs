//! Item Index Handler

use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::info;

use storefront_app::domain::store::models::Item;

use crate::{extensions::*, state::State};

/// Catalog item as serialized on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemResponse {
    /// The catalog identifier of the item
    pub item_id: u64,

    /// URL of the item image
    pub image_url: String,

    /// Display name
    pub name: String,

    /// Description text
    pub description: String,

    /// Price as a decimal number
    pub price: f64,

    /// Discount percentage applied to the price
    pub discount_percentage: f32,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        ItemResponse {
            item_id: item.item_id,
            image_url: item.image_url,
            name: item.name,
            description: item.description,
            price: item.price.to_f64().unwrap_or_default(),
            discount_percentage: item.discount_percentage,
        }
    }
}

/// Item Index Handler
///
/// Returns one page of catalog items.
#[endpoint(tags("items"), summary = "Get Items In store with pagination support")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<ItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let page_number = req.page_number()?;
    let page_size = req.page_size()?;

    info!("get items request received with page_number: {page_number} and page_size: {page_size}");

    let items = state.app.store.fetch_items(page_number, page_size).await;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}
