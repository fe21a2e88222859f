//! Errors

use salvo::http::StatusError;
use tracing::error;

use tradepost_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound | ProductsServiceError::InvalidReference => {
            StatusError::not_found().brief("Product not found")
        }
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid payload")
        }
        ProductsServiceError::AlreadyExists => StatusError::conflict(),
        ProductsServiceError::Sql(source) => {
            error!("catalog query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
