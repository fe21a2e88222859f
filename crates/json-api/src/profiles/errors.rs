//! Errors

use salvo::http::StatusError;
use tracing::error;

use tradepost_app::domain::profiles::ProfilesServiceError;

pub(crate) fn into_status_error(error: ProfilesServiceError) -> StatusError {
    match error {
        ProfilesServiceError::NotFound => {
            error!("profile lookup failed");

            StatusError::internal_server_error()
        }
        ProfilesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Profile field already taken")
        }
        ProfilesServiceError::MissingRequiredData | ProfilesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid profile payload")
        }
        ProfilesServiceError::Sql(source) => {
            error!("profile query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
