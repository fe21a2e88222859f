//! Profile Handlers

pub(crate) mod get;
pub(crate) mod update;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use tradepost_app::domain::profiles::models::Profile;

/// Profile Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileResponse {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            full_name: profile.full_name,
            email: profile.email,
            phone: profile.phone,
        }
    }
}
