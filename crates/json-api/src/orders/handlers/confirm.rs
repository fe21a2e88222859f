//! Confirm Order Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tradepost_app::domain::orders::models::{DeliveryType, OrderStatus, OrderUpdate, PaymentType};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, responses::OrderIdResponse},
    state::State,
};

/// Confirm Order Request
///
/// Scalar customer and delivery fields; line items are never touched here.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfirmOrderRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub delivery_type: Option<String>,
    pub payment_type: Option<String>,
    pub status: Option<String>,
}

impl From<ConfirmOrderRequest> for OrderUpdate {
    fn from(request: ConfirmOrderRequest) -> Self {
        Self {
            full_name: request.full_name,
            email: request.email,
            phone: request.phone,
            city: request.city,
            address: request.address,
            delivery_type: DeliveryType::parse(&request.delivery_type.unwrap_or_default()),
            payment_type: PaymentType::parse(&request.payment_type.unwrap_or_default()),
            status: OrderStatus::parse(&request.status.unwrap_or_default()),
        }
    }
}

/// Confirm Order Handler
///
/// Applies the confirmation fields to an order.
#[endpoint(tags("orders"), summary = "Confirm Order")]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<ConfirmOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderIdResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .confirm_order(id.into_inner(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrderIdResponse { order_id: order }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use tradepost_app::domain::orders::MockOrdersService;

    use crate::test_helpers::{MockApp, make_service, mock_state};

    use super::*;

    fn confirm_service(orders: MockOrdersService) -> Service {
        let (state, _sessions) = mock_state(MockApp {
            orders,
            ..MockApp::default()
        });

        make_service(&state, Router::with_path("order/{id}").post(handler))
    }

    #[tokio::test]
    async fn confirm_maps_field_strings_to_codes() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_confirm_order()
            .once()
            .withf(|id, update| {
                *id == 11
                    && update.full_name.as_deref() == Some("Jane Roe")
                    && update.city.as_deref() == Some("Springfield")
                    && update.delivery_type == DeliveryType::Express
                    && update.payment_type == PaymentType::OnlineForeign
                    && update.status == OrderStatus::InProcess
            })
            .return_once(|id, _| Ok(id));

        let mut res = TestClient::post("http://example.com/order/11")
            .json(&json!({
                "fullName": "Jane Roe",
                "email": "jane@example.com",
                "phone": "5551234",
                "city": "Springfield",
                "address": "12 Main St",
                "deliveryType": "express",
                "paymentType": "someone",
                "status": "In process",
                "orderId": 11,
                "products": [],
            }))
            .send(&confirm_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: OrderIdResponse = res.take_json().await?;

        assert_eq!(body.order_id, 11);

        Ok(())
    }

    #[tokio::test]
    async fn ordinary_delivery_and_online_payment_parse_to_zero_codes() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_confirm_order()
            .once()
            .withf(|_, update| {
                update.delivery_type == DeliveryType::Ordinary
                    && update.payment_type == PaymentType::Online
                    && update.status == OrderStatus::Accepted
            })
            .return_once(|id, _| Ok(id));

        let res = TestClient::post("http://example.com/order/12")
            .json(&json!({
                "deliveryType": "ordinary",
                "paymentType": "online",
                "status": "Accepted",
            }))
            .send(&confirm_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
