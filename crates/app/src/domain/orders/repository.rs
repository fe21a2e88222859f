//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{
    orders::models::{DeliveryType, Order, OrderStatus, OrderUpdate, PaymentType},
    products::models::ProductSnapshot,
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const FIND_PRODUCT_SQL: &str = include_str!("sql/find_product_by_title_description.sql");
const SET_PRODUCT_COUNT_SQL: &str = include_str!("sql/set_product_count.sql");
const ADD_ORDER_PRODUCT_SQL: &str = include_str!("sql/add_order_product.sql");
const SET_ORDER_CUSTOMER_SQL: &str = include_str!("sql/set_order_customer.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const GET_ORDER_PRODUCTS_SQL: &str = include_str!("sql/get_order_products.sql");
const UPDATE_ORDER_SQL: &str = include_str!("sql/update_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert an empty order row and return its id.
    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(CREATE_ORDER_SQL).fetch_one(&mut **tx).await
    }

    /// Match a product by its title and description.
    pub(crate) async fn find_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        title: &str,
        description: &str,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(FIND_PRODUCT_SQL)
            .bind(title)
            .bind(description)
            .fetch_one(&mut **tx)
            .await
    }

    /// Overwrite the shared quantity column on the product row.
    pub(crate) async fn set_product_count(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: i64,
        count: i32,
    ) -> Result<(), sqlx::Error> {
        query(SET_PRODUCT_COUNT_SQL)
            .bind(product)
            .bind(count)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn add_order_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: i64,
        product: i64,
    ) -> Result<(), sqlx::Error> {
        query(ADD_ORDER_PRODUCT_SQL)
            .bind(order)
            .bind(product)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn set_order_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: i64,
        full_name: &str,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        query(SET_ORDER_CUSTOMER_SQL)
            .bind(order)
            .bind(full_name)
            .bind(email)
            .bind(phone)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: i64,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(GET_ORDER_SQL)
            .bind(order)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        full_name: &str,
    ) -> Result<Vec<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(LIST_ORDERS_SQL)
            .bind(full_name)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_order_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: i64,
    ) -> Result<Vec<ProductSnapshot>, sqlx::Error> {
        query_as::<Postgres, ProductSnapshot>(GET_ORDER_PRODUCTS_SQL)
            .bind(order)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: i64,
        update: &OrderUpdate,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(UPDATE_ORDER_SQL)
            .bind(order)
            .bind(update.full_name.as_deref())
            .bind(update.email.as_deref())
            .bind(update.phone.as_deref())
            .bind(update.city.as_deref())
            .bind(update.address.as_deref())
            .bind(update.delivery_type.code())
            .bind(update.payment_type.code())
            .bind(update.status.code())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            date: row.try_get::<SqlxTimestamp, _>("date")?.to_jiff(),
            full_name: row.try_get("full_name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            city: row.try_get("city")?,
            address: row.try_get("address")?,
            delivery_type: DeliveryType::from_code(row.try_get("delivery_type")?),
            payment_type: PaymentType::from_code(row.try_get("payment_type")?),
            status: OrderStatus::from_code(row.try_get("status")?),
            products: Vec::new(),
        })
    }
}
