//! Settings service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsServiceError {
    #[error("setting {key} holds a non-numeric value")]
    InvalidValue { key: String },

    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
