//! Update Profile Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};

use tradepost_app::domain::profiles::models::ProfileUpdate;

use crate::{
    extensions::*,
    profiles::{errors::into_status_error, handlers::ProfileResponse},
    session::{current_user, require_user},
    state::State,
};

/// Update Profile Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            full_name: request.full_name,
            email: request.email,
            phone: request.phone,
        }
    }
}

/// Update Profile Handler
///
/// Overwrites the caller's profile fields and returns the updated profile.
#[endpoint(
    tags("profiles"),
    summary = "Update Profile",
    responses(
        (status_code = StatusCode::OK, description = "Updated profile"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not authenticated"),
        (status_code = StatusCode::CONFLICT, description = "Profile field already taken"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateProfileRequest>,
    depot: &mut Depot,
) -> Result<Json<ProfileResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;

    let user = require_user(current_user(state, session).await?)?;

    let profile = state
        .app
        .profiles
        .update_profile(user, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(profile.into()))
}
