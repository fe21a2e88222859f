//! Checkout Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};

use tradepost_app::domain::orders::models::{Customer, SubmittedItem};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, responses::OrderIdResponse},
    session::current_user,
    state::State,
};

/// Submitted Line Item
///
/// A basket entry submitted at checkout. Only the matching fields are read;
/// the rest of the snapshot is ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubmittedItemRequest {
    pub title: String,
    pub description: String,
    pub count: i32,
}

impl From<SubmittedItemRequest> for SubmittedItem {
    fn from(request: SubmittedItemRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            count: request.count,
        }
    }
}

/// Checkout Handler
///
/// Persists the submitted basket as a new order. When the caller is
/// authenticated, their profile's customer fields are copied onto it.
#[endpoint(
    tags("orders"),
    summary = "Checkout",
    responses(
        (status_code = StatusCode::OK, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid line items"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<Vec<SubmittedItemRequest>>,
    depot: &mut Depot,
) -> Result<Json<OrderIdResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;

    let items: Vec<SubmittedItem> = json.into_inner().into_iter().map(Into::into).collect();

    let customer = match current_user(state, session).await? {
        Some(user) => {
            let profile = state
                .app
                .profiles
                .get_profile(user)
                .await
                .or_500("failed to load caller profile")?;

            Some(Customer {
                full_name: profile.full_name,
                email: profile.email,
                phone: profile.phone,
            })
        }
        None => None,
    };

    let order = state
        .app
        .orders
        .checkout(items, customer)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrderIdResponse { order_id: order }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use tradepost_app::domain::{
        orders::{MockOrdersService, OrdersServiceError},
        profiles::MockProfilesService,
    };

    use crate::test_helpers::{
        MockApp, authenticate, make_profile, make_service, mock_state,
    };

    use super::*;

    fn checkout_service(app: MockApp) -> (Service, Arc<tradepost_app::sessions::InMemorySessionStore>) {
        let (state, sessions) = mock_state(app);

        (
            make_service(&state, Router::with_path("orders").post(handler)),
            sessions,
        )
    }

    #[tokio::test]
    async fn guest_checkout_returns_order_id() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_checkout()
            .once()
            .withf(|items, customer| {
                items.len() == 1
                    && items[0].title == "Teapot"
                    && items[0].count == 2
                    && customer.is_none()
            })
            .return_once(|_, _| Ok(17));

        let (service, _sessions) = checkout_service(MockApp {
            orders,
            ..MockApp::default()
        });

        let mut res = TestClient::post("http://example.com/orders")
            .json(&json!([
                { "title": "Teapot", "description": "Ceramic", "count": 2, "price": 10.0, "id": 7 }
            ]))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: OrderIdResponse = res.take_json().await?;

        assert_eq!(body.order_id, 17);

        Ok(())
    }

    #[tokio::test]
    async fn authenticated_checkout_copies_profile_fields() -> TestResult {
        let mut profiles = MockProfilesService::new();

        profiles
            .expect_get_profile()
            .once()
            .return_once(|user| Ok(make_profile(user, "Jane Roe")));

        let mut orders = MockOrdersService::new();

        orders
            .expect_checkout()
            .once()
            .withf(|_, customer| {
                customer
                    .as_ref()
                    .is_some_and(|customer| customer.full_name == "Jane Roe")
            })
            .return_once(|_, _| Ok(18));

        let (service, sessions) = checkout_service(MockApp {
            orders,
            profiles,
            ..MockApp::default()
        });

        authenticate(&sessions, 42).await?;

        let res = TestClient::post("http://example.com/orders")
            .json(&json!([
                { "title": "Teapot", "description": "Ceramic", "count": 1 }
            ]))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn checkout_with_no_items_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_checkout()
            .once()
            .withf(|items, _| items.is_empty())
            .return_once(|_, _| Err(OrdersServiceError::NoLineItems));

        let (service, _sessions) = checkout_service(MockApp {
            orders,
            ..MockApp::default()
        });

        let res = TestClient::post("http://example.com/orders")
            .json(&json!([]))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_product_surfaces_as_server_error() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_checkout()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let (service, _sessions) = checkout_service(MockApp {
            orders,
            ..MockApp::default()
        });

        let res = TestClient::post("http://example.com/orders")
            .json(&json!([
                { "title": "Ghost", "description": "Missing", "count": 1 }
            ]))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
