//! Payments service.

use async_trait::async_trait;
use mockall::automock;
use rand::Rng;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        orders::models::OrderStatus,
        payments::{
            errors::PaymentsServiceError,
            models::{PaymentCard, PaymentOutcome},
            repository::PgPaymentsRepository,
        },
    },
};

/// Length of the opaque token returned with a declined payment.
const ERROR_TOKEN_LEN: usize = 10;

#[derive(Debug, Clone)]
pub struct PgPaymentsService {
    db: Db,
    repository: PgPaymentsRepository,
}

impl PgPaymentsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPaymentsRepository::new(),
        }
    }
}

#[async_trait]
impl PaymentsService for PgPaymentsService {
    async fn pay(
        &self,
        order: i64,
        card: PaymentCard,
    ) -> Result<PaymentOutcome, PaymentsServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.get_order_status(&mut tx, order).await?;

        let (status, persist) = decide(&card);

        if persist {
            self.repository.create_payment(&mut tx, &card).await?;
        }

        self.repository
            .set_order_status(&mut tx, order, status.code())
            .await?;

        tx.commit().await?;

        debug!(order, status = status.code(), "payment processed");

        match status {
            OrderStatus::Accepted => Ok(PaymentOutcome::Accepted),
            _ => Ok(PaymentOutcome::Declined {
                payment_error: error_token(),
            }),
        }
    }
}

#[automock]
#[async_trait]
pub trait PaymentsService: Send + Sync {
    /// Evaluate a payment attempt against an order, persisting the card
    /// when it is structurally valid and finalising the order status.
    async fn pay(
        &self,
        order: i64,
        card: PaymentCard,
    ) -> Result<PaymentOutcome, PaymentsServiceError>;
}

/// Gateway stub decision: a structurally valid card whose number ends in 0
/// is approved; every other card declines. Valid cards are persisted even
/// when declined.
fn decide(card: &PaymentCard) -> (OrderStatus, bool) {
    match card.validate() {
        Ok(()) if card.number % 10 == 0 => (OrderStatus::Accepted, true),
        Ok(()) => (OrderStatus::Declined, true),
        Err(_) => (OrderStatus::Declined, false),
    }
}

fn error_token() -> String {
    let mut rng = rand::thread_rng();

    (0..ERROR_TOKEN_LEN)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect()
}
