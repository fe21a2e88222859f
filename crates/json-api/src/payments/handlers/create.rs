//! Pay Order Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tradepost_app::domain::payments::models::{PaymentCard, PaymentOutcome};

use crate::{
    basket::errors::into_status_error as basket_into_status_error,
    extensions::*,
    payments::errors::into_status_error,
    state::State,
};

/// Payment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentRequest {
    pub number: i64,
    pub name: String,
    pub month: String,
    pub year: String,
    pub code: String,
}

impl From<PaymentRequest> for PaymentCard {
    fn from(request: PaymentRequest) -> Self {
        Self {
            number: request.number,
            name: request.name,
            month: request.month,
            year: request.year,
            code: request.code,
        }
    }
}

/// Payment Error Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentErrorResponse {
    /// Opaque token; a fresh value per declined attempt.
    pub payment_error: String,
}

/// Pay Order Handler
///
/// Evaluates the submitted card, finalises the order status and empties the
/// session basket on either outcome.
#[endpoint(
    tags("payments"),
    summary = "Pay Order",
    responses(
        (status_code = StatusCode::ACCEPTED, description = "Payment accepted"),
        (status_code = StatusCode::OK, description = "Payment declined"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<PaymentRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;

    let outcome = state
        .app
        .payments
        .pay(id.into_inner(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    // The basket empties whether the payment was accepted or declined.
    state
        .app
        .basket
        .clear(session)
        .await
        .map_err(basket_into_status_error)?;

    match outcome {
        PaymentOutcome::Accepted => Ok(StatusCode::ACCEPTED),
        PaymentOutcome::Declined { payment_error } => {
            res.render(Json(PaymentErrorResponse { payment_error }));

            Ok(StatusCode::OK)
        }
    }
}
