//! Order response shapes.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use tradepost_app::domain::orders::{
    models::Order,
    pricing::{self, PricingSettings},
};

use crate::catalog::responses::{ProductResponse, money};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    pub id: i64,
    pub created_at: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub delivery_type: String,
    pub payment_type: String,
    /// Line-item subtotal plus the delivery fee.
    pub total_cost: f64,
    pub status: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub products: Vec<ProductResponse>,
}

impl OrderResponse {
    pub(crate) fn from_order(order: Order, settings: &PricingSettings) -> Self {
        let total = pricing::order_total(&order.products, order.delivery_type, settings);

        Self {
            id: order.id,
            created_at: order.date.strftime("%Y/%m/%d-%H:%M:%S").to_string(),
            full_name: order.full_name,
            email: order.email,
            phone: order.phone,
            delivery_type: order.delivery_type.as_str().to_string(),
            payment_type: order.payment_type.as_str().to_string(),
            total_cost: money(total),
            status: order.status.as_str().to_string(),
            city: order.city,
            address: order.address,
            products: order
                .products
                .into_iter()
                .map(ProductResponse::from)
                .collect(),
        }
    }
}

/// Order Id Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderIdResponse {
    pub order_id: i64,
}
