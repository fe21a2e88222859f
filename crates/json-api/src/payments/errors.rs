//! Errors

use salvo::http::StatusError;
use tracing::error;

use tradepost_app::domain::payments::PaymentsServiceError;

/// An unresolved order id surfaces as a generic server error, not a 404.
pub(crate) fn into_status_error(error: PaymentsServiceError) -> StatusError {
    match error {
        PaymentsServiceError::NotFound => {
            error!("order lookup failed during payment");

            StatusError::internal_server_error()
        }
        PaymentsServiceError::InvalidReference
        | PaymentsServiceError::MissingRequiredData
        | PaymentsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid payment payload")
        }
        PaymentsServiceError::Sql(source) => {
            error!("payment query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
