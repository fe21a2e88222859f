//! Session basket

pub mod errors;
pub mod service;

pub use errors::BasketServiceError;
pub use service::*;
