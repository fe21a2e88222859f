//! Get Profile Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    profiles::{errors::into_status_error, handlers::ProfileResponse},
    session::{current_user, require_user},
    state::State,
};

/// Get Profile Handler
///
/// Returns the caller's profile.
#[endpoint(
    tags("profiles"),
    summary = "Get Profile",
    responses(
        (status_code = StatusCode::OK, description = "Caller's profile"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not authenticated"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProfileResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;

    let user = require_user(current_user(state, session).await?)?;

    let profile = state
        .app
        .profiles
        .get_profile(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(profile.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tradepost_app::domain::profiles::MockProfilesService;

    use crate::test_helpers::{MockApp, authenticate, make_profile, make_service, mock_state};

    use super::*;

    #[tokio::test]
    async fn unauthenticated_caller_gets_401() -> TestResult {
        let (state, _sessions) = mock_state(MockApp::default());

        let res = TestClient::get("http://example.com/profile")
            .send(&make_service(
                &state,
                Router::with_path("profile").get(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn returns_the_callers_profile() -> TestResult {
        let mut profiles = MockProfilesService::new();

        profiles
            .expect_get_profile()
            .once()
            .withf(|user| *user == 42)
            .return_once(|user| Ok(make_profile(user, "Jane Roe")));

        let (state, sessions) = mock_state(MockApp {
            profiles,
            ..MockApp::default()
        });

        authenticate(&sessions, 42).await?;

        let mut res = TestClient::get("http://example.com/profile")
            .send(&make_service(
                &state,
                Router::with_path("profile").get(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProfileResponse = res.take_json().await?;

        assert_eq!(body.full_name, "Jane Roe");

        Ok(())
    }
}
