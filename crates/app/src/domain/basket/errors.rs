//! Basket service errors.

use thiserror::Error;

use crate::{domain::products::ProductsServiceError, sessions::SessionStoreError};

#[derive(Debug, Error)]
pub enum BasketServiceError {
    #[error("product lookup failed")]
    Product(#[from] ProductsServiceError),

    #[error("session storage error")]
    Session(#[from] SessionStoreError),

    #[error("malformed basket state")]
    Corrupt(#[source] serde_json::Error),
}
