//! Session middleware.
//!
//! Issues the session id cookie on first contact and exposes the session
//! uuid to handlers through the depot. The external identity subsystem is
//! only visible here as an optional user id stored in the session.

use std::sync::Arc;

use salvo::{http::cookie::Cookie, prelude::*};
use uuid::Uuid;

use tradepost_app::sessions::USER_ID_KEY;

use crate::{extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn middleware(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let cookie_name = match depot.obtain::<Arc<State>>() {
        Ok(state) => state.session_cookie.clone(),
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    let session = req
        .cookie(&cookie_name)
        .and_then(|cookie| cookie.value().parse::<Uuid>().ok());

    let session = match session {
        Some(session) => session,
        None => {
            let session = Uuid::new_v4();

            res.add_cookie(
                Cookie::build((cookie_name, session.to_string()))
                    .path("/")
                    .http_only(true)
                    .build(),
            );

            session
        }
    };

    depot.insert_session_uuid(session);

    ctrl.call_next(req, depot, res).await;
}

/// The authenticated user's id, when the external identity subsystem has
/// recorded one in the session.
pub(crate) async fn current_user(
    state: &State,
    session: Uuid,
) -> Result<Option<i64>, StatusError> {
    let value = state
        .app
        .sessions
        .get(session, USER_ID_KEY)
        .await
        .or_500("failed to read session")?;

    Ok(value.and_then(|value| value.as_i64()))
}

pub(crate) fn require_user(user: Option<i64>) -> Result<i64, StatusError> {
    user.ok_or_else(|| StatusError::unauthorized().brief("Authentication required"))
}
