//! Product Detail Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::Value;

use crate::{
    catalog::{
        errors::into_status_error,
        handlers::{cache_key, respond_cached},
        responses::ProductDetailResponse,
    },
    extensions::*,
    state::State,
};

/// Product Detail Handler
///
/// Product with its reviews and specifications, served through the page
/// cache.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Value>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let key = cache_key(req);

    let product = req
        .param::<i64>("id")
        .ok_or_else(StatusError::bad_request)?;

    respond_cached(state, key, async {
        let detail = state
            .app
            .products
            .get_product(product)
            .await
            .map_err(into_status_error)?;

        serde_json::to_value(ProductDetailResponse::from(detail))
            .or_500("failed to serialise product detail")
    })
    .await
}
