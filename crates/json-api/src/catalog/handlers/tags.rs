//! Tags Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::Value;

use crate::{
    catalog::{
        errors::into_status_error,
        handlers::{cache_key, respond_cached},
        responses::TagResponse,
    },
    extensions::*,
    state::State,
};

/// Tags ordered by product count, optionally scoped to a category.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Value>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let key = cache_key(req);
    let category = req.query::<i64>("category");

    respond_cached(state, key, async {
        let tags = state
            .app
            .products
            .tags(category)
            .await
            .map_err(into_status_error)?;

        let tags: Vec<TagResponse> = tags.into_iter().map(TagResponse::from).collect();

        serde_json::to_value(tags).or_500("failed to serialise tags")
    })
    .await
}
