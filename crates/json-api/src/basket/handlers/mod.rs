//! Basket Handlers

pub(crate) mod add;
pub(crate) mod get;
pub(crate) mod remove;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Basket Item Request
///
/// Product id and quantity for both add and remove operations.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BasketItemRequest {
    pub id: i64,
    pub count: i32,
}
