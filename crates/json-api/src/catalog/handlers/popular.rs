//! Popular Products Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::Value;

use crate::{
    catalog::{
        errors::into_status_error,
        handlers::{cache_key, respond_cached},
        responses::ProductResponse,
    },
    extensions::*,
    state::State,
};

/// Top products by sort index.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Value>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let key = cache_key(req);

    respond_cached(state, key, async {
        let products = state
            .app
            .products
            .popular()
            .await
            .map_err(into_status_error)?;

        let products: Vec<ProductResponse> =
            products.into_iter().map(ProductResponse::from).collect();

        serde_json::to_value(products).or_500("failed to serialise popular products")
    })
    .await
}
