//! List Orders Handler

use std::sync::Arc;

use salvo::prelude::*;

use tradepost_app::domain::orders::pricing::PricingSettings;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, responses::OrderResponse},
    session::{current_user, require_user},
    state::State,
};

/// List Orders Handler
///
/// Returns the caller's orders, matched to their profile name, newest
/// first.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    responses(
        (status_code = StatusCode::OK, description = "Caller's orders"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not authenticated"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;

    let user = require_user(current_user(state, session).await?)?;

    let profile = state
        .app
        .profiles
        .get_profile(user)
        .await
        .or_500("failed to load caller profile")?;

    let orders = state
        .app
        .orders
        .list_orders(&profile.full_name)
        .await
        .map_err(into_status_error)?;

    let settings = PricingSettings::load(state.app.settings.as_ref())
        .await
        .or_500("failed to load pricing settings")?;

    Ok(Json(
        orders
            .into_iter()
            .map(|order| OrderResponse::from_order(order, &settings))
            .collect(),
    ))
}
