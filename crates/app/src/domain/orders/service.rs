//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::orders::{
        errors::OrdersServiceError,
        models::{Customer, Order, OrderUpdate, SubmittedItem},
        repository::PgOrdersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn checkout(
        &self,
        items: Vec<SubmittedItem>,
        customer: Option<Customer>,
    ) -> Result<i64, OrdersServiceError> {
        if items.is_empty() {
            return Err(OrdersServiceError::NoLineItems);
        }

        let mut tx = self.db.begin().await?;

        let order = self.repository.create_order(&mut tx).await?;

        for item in &items {
            let product = self
                .repository
                .find_product(&mut tx, &item.title, &item.description)
                .await?;

            // The submitted quantity is written onto the shared product row;
            // the join row itself carries no count.
            self.repository
                .set_product_count(&mut tx, product, item.count)
                .await?;

            self.repository
                .add_order_product(&mut tx, order, product)
                .await?;
        }

        if let Some(customer) = customer {
            self.repository
                .set_order_customer(
                    &mut tx,
                    order,
                    &customer.full_name,
                    customer.email.as_deref(),
                    customer.phone.as_deref(),
                )
                .await?;
        }

        tx.commit().await?;

        debug!(order, lines = items.len(), "persisted checkout");

        Ok(order)
    }

    async fn list_orders(&self, full_name: &str) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut orders = self.repository.list_orders(&mut tx, full_name).await?;

        for order in &mut orders {
            order.products = self.repository.get_order_products(&mut tx, order.id).await?;
        }

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(&self, order: i64) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self.repository.get_order(&mut tx, order).await?;

        order.products = self.repository.get_order_products(&mut tx, order.id).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn confirm_order(
        &self,
        order: i64,
        update: OrderUpdate,
    ) -> Result<i64, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.repository.update_order(&mut tx, order, &update).await?;

        tx.commit().await?;

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Persist a basket submission as a new order and return its id.
    ///
    /// Each submitted line is matched to a product by (title, description);
    /// the submitted quantity overwrites the product row's shared `count`
    /// column. Customer fields are copied when the caller is authenticated.
    async fn checkout(
        &self,
        items: Vec<SubmittedItem>,
        customer: Option<Customer>,
    ) -> Result<i64, OrdersServiceError>;

    /// Orders owned by the given customer name, newest first.
    async fn list_orders(&self, full_name: &str) -> Result<Vec<Order>, OrdersServiceError>;

    /// A single order with its line items.
    async fn get_order(&self, order: i64) -> Result<Order, OrdersServiceError>;

    /// Apply the confirmation fields to an order and return its id.
    async fn confirm_order(
        &self,
        order: i64,
        update: OrderUpdate,
    ) -> Result<i64, OrdersServiceError>;
}
