//! Errors

use salvo::http::StatusError;
use tracing::error;

use tradepost_app::domain::orders::OrdersServiceError;

/// Checkout validation failures are explicit 400s; unresolved ids surface
/// as generic server errors, not structured 404s.
pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NoLineItems => {
            StatusError::bad_request().brief("Order has no valid line items")
        }
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => StatusError::bad_request().brief("Invalid order payload"),
        OrdersServiceError::NotFound => {
            error!("order lookup failed");

            StatusError::internal_server_error()
        }
        OrdersServiceError::Sql(source) => {
            error!("order query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
