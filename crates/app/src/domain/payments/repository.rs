//! Payments Repository

use sqlx::{Postgres, Transaction, query, query_scalar};

use crate::domain::payments::models::PaymentCard;

const CREATE_PAYMENT_SQL: &str = include_str!("sql/create_payment.sql");
const GET_ORDER_STATUS_SQL: &str = include_str!("sql/get_order_status.sql");
const SET_ORDER_STATUS_SQL: &str = include_str!("sql/set_order_status.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPaymentsRepository;

impl PgPaymentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_payment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        card: &PaymentCard,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_PAYMENT_SQL)
            .bind(card.number)
            .bind(&card.name)
            .bind(&card.month)
            .bind(&card.year)
            .bind(&card.code)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Confirms the order exists before its status is touched.
    pub(crate) async fn get_order_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: i64,
    ) -> Result<i32, sqlx::Error> {
        query_scalar(GET_ORDER_STATUS_SQL)
            .bind(order)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_order_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: i64,
        status: i32,
    ) -> Result<(), sqlx::Error> {
        query(SET_ORDER_STATUS_SQL)
            .bind(order)
            .bind(status)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}
