//! Catalog Handlers

pub(crate) mod banners;
pub(crate) mod categories;
pub(crate) mod index;
pub(crate) mod limited;
pub(crate) mod popular;
pub(crate) mod product;
pub(crate) mod reviews;
pub(crate) mod sales;
pub(crate) mod tags;

use std::future::Future;

use salvo::prelude::*;
use serde_json::Value;

use crate::state::State;

/// Cache key: request path plus query string.
pub(crate) fn cache_key(req: &Request) -> String {
    req.uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_string(), ToString::to_string)
}

/// Serve from the page cache, computing and storing the response on a miss.
pub(crate) async fn respond_cached<F>(
    state: &State,
    key: String,
    load: F,
) -> Result<Json<Value>, StatusError>
where
    F: Future<Output = Result<Value, StatusError>>,
{
    if let Some(hit) = state.pages.get(&key).await {
        return Ok(Json(hit));
    }

    let value = load.await?;

    state.pages.insert(key, value.clone()).await;

    Ok(Json(value))
}
