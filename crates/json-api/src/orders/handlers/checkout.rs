//! Order Checkout Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use storefront_app::domain::store::models::NewOrder;

use crate::{
    extensions::*,
    orders::{errors::CheckoutRejection, validation::validate_checkout},
    state::State,
};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutRequest {
    /// Catalog id of the item being ordered
    pub item_id: u64,

    /// Customer name; letters and spaces only
    pub full_name: String,

    /// Free-text delivery address
    #[serde(default)]
    pub address: Option<String>,

    /// Contact email address
    pub email: String,

    /// Contact phone number, `xxx-xxx-xxxx`
    pub phone_number: String,

    /// Payment card number, nineteen digits
    pub credit_card_number: String,
}

impl From<CheckoutRequest> for NewOrder {
    fn from(request: CheckoutRequest) -> Self {
        NewOrder {
            item_id: request.item_id,
            full_name: request.full_name,
            address: request.address,
            email: request.email,
            phone_number: request.phone_number,
            credit_card_number: request.credit_card_number,
        }
    }
}

/// Order Checkout Handler
///
/// Validates the order payload, then stores it and returns the assigned
/// order id as a bare number.
#[endpoint(
    tags("orders"),
    summary = "order checkout",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation failed or unknown item"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<u64>, CheckoutRejection> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    info!(
        "order checkout request received with item_id: {}",
        request.item_id
    );

    if let Err(violations) = validate_checkout(&request) {
        warn!("order validation failed with violations: {violations}");

        return Err(CheckoutRejection::Invalid(violations));
    }

    let order_id = state
        .app
        .store
        .checkout(request.into())
        .await
        .map_err(|error| {
            warn!("{error}");

            CheckoutRejection::Store(error)
        })?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(order_id))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::store::{MockStoreService, StoreServiceError};

    use crate::{
        orders::validation::{
            CREDIT_CARD_FORMAT, EMAIL_SYNTAX, FULL_NAME_LETTERS, PHONE_FORMAT,
        },
        test_helpers::{seeded_service, store_service, valid_checkout_body},
    };

    use super::*;

    #[tokio::test]
    async fn test_checkout_returns_201_with_bare_order_id() -> TestResult {
        let mut store = MockStoreService::new();

        store
            .expect_checkout()
            .once()
            .withf(|order: &NewOrder| order.item_id == 1 && order.full_name == "Naveen Kandagatla")
            .return_once(|_| Ok(1));

        store.expect_fetch_items().never();
        store.expect_order().never();

        let mut res = TestClient::post("http://example.com/api/v1/store/order/checkout")
            .json(&valid_checkout_body(1))
            .send(&store_service(store))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(res.take_string().await?, "1");

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_unknown_item_returns_400_with_plain_text() -> TestResult {
        let mut store = MockStoreService::new();

        store
            .expect_checkout()
            .once()
            .withf(|order: &NewOrder| order.item_id == 100)
            .return_once(|_| Err(StoreServiceError::ItemNotFound(100)));

        store.expect_fetch_items().never();
        store.expect_order().never();

        let mut res = TestClient::post("http://example.com/api/v1/store/order/checkout")
            .json(&valid_checkout_body(100))
            .send(&store_service(store))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(res.take_string().await?, "Item Not found with id: 100");

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_invalid_fields_return_400_with_violation_map() -> TestResult {
        let mut store = MockStoreService::new();

        // Validation runs before any store interaction.
        store.expect_checkout().never();
        store.expect_fetch_items().never();
        store.expect_order().never();

        let mut res = TestClient::post("http://example.com/api/v1/store/order/checkout")
            .json(&json!({
                "itemId": 1,
                "fullName": "Naveen123",
                "address": "Bangalore,India",
                "email": "testEmail",
                "phoneNumber": "123-7890",
                "creditCardNumber": "1234",
            }))
            .send(&store_service(store))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(
            body,
            json!({
                "fullName": FULL_NAME_LETTERS,
                "email": EMAIL_SYNTAX,
                "phoneNumber": PHONE_FORMAT,
                "creditCardNumber": CREDIT_CARD_FORMAT,
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_without_address_succeeds() -> TestResult {
        let mut store = MockStoreService::new();

        store
            .expect_checkout()
            .once()
            .withf(|order: &NewOrder| order.address.is_none())
            .return_once(|_| Ok(7));

        store.expect_fetch_items().never();
        store.expect_order().never();

        let mut res = TestClient::post("http://example.com/api/v1/store/order/checkout")
            .json(&json!({
                "itemId": 1,
                "fullName": "Naveen Kandagatla",
                "email": "test@gmail.com",
                "phoneNumber": "123-456-7890",
                "creditCardNumber": "1234567891234567891",
            }))
            .send(&store_service(store))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(res.take_string().await?, "7");

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_against_seeded_store_assigns_first_id() -> TestResult {
        let service = seeded_service();

        let mut res = TestClient::post("http://example.com/api/v1/store/order/checkout")
            .json(&valid_checkout_body(1))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(res.take_string().await?, "1");

        let mut res = TestClient::post("http://example.com/api/v1/store/order/checkout")
            .json(&valid_checkout_body(2))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(res.take_string().await?, "2");

        Ok(())
    }
}
