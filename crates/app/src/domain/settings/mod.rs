//! Site settings

pub mod errors;
pub mod repository;
pub mod service;

pub use errors::SettingsServiceError;
pub use repository::*;
pub use service::*;
