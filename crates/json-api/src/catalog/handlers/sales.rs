//! Sales Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::Value;

use crate::{
    catalog::{
        errors::into_status_error,
        handlers::{cache_key, respond_cached},
        responses::{PageResponse, SaleResponse},
    },
    extensions::*,
    state::State,
};

/// Paginated sales listing.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Value>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let key = cache_key(req);

    let current_page = req.query::<u32>("currentPage").unwrap_or(1);
    let limit = req.query::<u32>("limit").unwrap_or(0);

    respond_cached(state, key, async {
        let page = state
            .app
            .products
            .sales(current_page, limit)
            .await
            .map_err(into_status_error)?;

        let response: PageResponse<SaleResponse> = page.into();

        serde_json::to_value(response).or_500("failed to serialise sales page")
    })
    .await
}
