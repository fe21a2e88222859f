//! Create Review Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tradepost_app::domain::products::models::NewReview;

use crate::{
    catalog::{errors::into_status_error, responses::ReviewResponse},
    extensions::*,
    state::State,
};

/// Create Review Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateReviewRequest {
    pub author: String,
    pub email: String,
    pub text: String,
    pub rate: i32,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(request: CreateReviewRequest) -> Self {
        Self {
            author: request.author,
            email: request.email,
            text: request.text,
            rate: request.rate,
        }
    }
}

/// Create Review Handler
///
/// Adds a review and returns the product's full review list.
#[endpoint(
    tags("catalog"),
    summary = "Create Review",
    responses(
        (status_code = StatusCode::CREATED, description = "Review created"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<CreateReviewRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Vec<ReviewResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let reviews = state
        .app
        .products
        .create_review(id.into_inner(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}
