//! Categories Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::Value;

use crate::{
    catalog::{
        errors::into_status_error,
        handlers::{cache_key, respond_cached},
        responses::CategoryResponse,
    },
    extensions::*,
    state::State,
};

/// Categories with their subcategories.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Value>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let key = cache_key(req);

    respond_cached(state, key, async {
        let categories = state
            .app
            .products
            .categories()
            .await
            .map_err(into_status_error)?;

        let categories: Vec<CategoryResponse> =
            categories.into_iter().map(CategoryResponse::from).collect();

        serde_json::to_value(categories).or_500("failed to serialise categories")
    })
    .await
}
