//! Payments

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::PaymentsServiceError;
pub use service::*;
