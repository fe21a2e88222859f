//! Get Basket Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    basket::errors::into_status_error, catalog::responses::ProductResponse, extensions::*,
    state::State,
};

/// Get Basket Handler
///
/// Returns the current session basket, initialising it when absent.
#[endpoint(tags("basket"), summary = "Get Basket")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;

    let basket = state
        .app
        .basket
        .get(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(basket.into_iter().map(ProductResponse::from).collect()))
}
