//! Add Basket Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    basket::{errors::into_status_error, handlers::BasketItemRequest},
    catalog::responses::ProductResponse,
    extensions::*,
    state::State,
};

/// Add Basket Item Handler
///
/// Adds a quantity of a product to the session basket and returns the
/// updated basket.
#[endpoint(
    tags("basket"),
    summary = "Add Basket Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<BasketItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;

    let item = json.into_inner();

    let basket = state
        .app
        .basket
        .add(session, item.id, item.count)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(basket.into_iter().map(ProductResponse::from).collect()))
}
