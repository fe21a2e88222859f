//! Errors

use salvo::http::StatusError;
use tracing::error;

use tradepost_app::domain::basket::BasketServiceError;

/// Basket failures all surface as generic server errors: an unknown product
/// id on add is a raw lookup failure, not a structured 404.
pub(crate) fn into_status_error(error: BasketServiceError) -> StatusError {
    match error {
        BasketServiceError::Product(source) => {
            error!("basket product lookup failed: {source}");

            StatusError::internal_server_error()
        }
        BasketServiceError::Session(source) => {
            error!("basket session access failed: {source}");

            StatusError::internal_server_error()
        }
        BasketServiceError::Corrupt(source) => {
            error!("basket state failed to deserialise: {source}");

            StatusError::internal_server_error()
        }
    }
}
