//! Remove Basket Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    basket::{errors::into_status_error, handlers::BasketItemRequest},
    catalog::responses::ProductResponse,
    extensions::*,
    state::State,
};

/// Remove Basket Item Handler
///
/// Removes a quantity of a product from the session basket and returns the
/// updated basket. Unknown product ids are ignored.
#[endpoint(tags("basket"), summary = "Remove Basket Item")]
pub(crate) async fn handler(
    json: JsonBody<BasketItemRequest>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;

    let item = json.into_inner();

    let basket = state
        .app
        .basket
        .remove(session, item.id, item.count)
        .await
        .map_err(into_status_error)?;

    Ok(Json(basket.into_iter().map(ProductResponse::from).collect()))
}
