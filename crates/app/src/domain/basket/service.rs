//! Session basket service.
//!
//! The basket is an ordered list of product snapshots held in one session
//! slot, at most one entry per product, with the snapshot's `count` field
//! carrying the session quantity. Every operation rewrites the whole list
//! back into the session store; concurrent requests within one session are
//! last-write-wins.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    domain::{
        basket::errors::BasketServiceError,
        products::{ProductsService, models::ProductSnapshot},
    },
    sessions::SessionStore,
};

/// A basket entry is a product snapshot whose `count` is the quantity
/// selected in this session.
pub type BasketEntry = ProductSnapshot;

#[derive(Clone)]
pub struct SessionBasketService {
    sessions: Arc<dyn SessionStore>,
    products: Arc<dyn ProductsService>,
    basket_key: String,
}

impl SessionBasketService {
    #[must_use]
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        products: Arc<dyn ProductsService>,
        basket_key: String,
    ) -> Self {
        Self {
            sessions,
            products,
            basket_key,
        }
    }

    async fn load(&self, session: Uuid) -> Result<Option<Vec<BasketEntry>>, BasketServiceError> {
        self.sessions
            .get(session, &self.basket_key)
            .await?
            .map(|value| serde_json::from_value(value).map_err(BasketServiceError::Corrupt))
            .transpose()
    }

    async fn store(
        &self,
        session: Uuid,
        basket: &[BasketEntry],
    ) -> Result<(), BasketServiceError> {
        let value = serde_json::to_value(basket).map_err(BasketServiceError::Corrupt)?;

        self.sessions.set(session, &self.basket_key, value).await?;

        Ok(())
    }
}

#[async_trait]
impl BasketService for SessionBasketService {
    async fn get(&self, session: Uuid) -> Result<Vec<BasketEntry>, BasketServiceError> {
        match self.load(session).await? {
            Some(basket) => Ok(basket),
            None => {
                // First access initialises the session slot.
                self.store(session, &[]).await?;

                Ok(Vec::new())
            }
        }
    }

    async fn add(
        &self,
        session: Uuid,
        product: i64,
        count: i32,
    ) -> Result<Vec<BasketEntry>, BasketServiceError> {
        let mut basket = self.load(session).await?.unwrap_or_default();

        match basket.iter().position(|entry| entry.id == product) {
            Some(index) => basket[index].count += count,
            None => {
                let mut snapshot = self.products.snapshot(product).await?;
                snapshot.count = count;
                basket.push(snapshot);
            }
        }

        self.store(session, &basket).await?;

        Ok(basket)
    }

    async fn remove(
        &self,
        session: Uuid,
        product: i64,
        count: i32,
    ) -> Result<Vec<BasketEntry>, BasketServiceError> {
        let mut basket = self.load(session).await?.unwrap_or_default();

        // Unknown product ids are deliberately ignored.
        if let Some(index) = basket.iter().position(|entry| entry.id == product) {
            basket[index].count = (basket[index].count - count).max(0);

            if basket[index].count == 0 {
                basket.remove(index);
            }
        }

        self.store(session, &basket).await?;

        Ok(basket)
    }

    async fn clear(&self, session: Uuid) -> Result<bool, BasketServiceError> {
        let cleared = match self.load(session).await? {
            Some(basket) if !basket.is_empty() => {
                self.store(session, &[]).await?;

                true
            }
            _ => false,
        };

        Ok(cleared)
    }
}

#[automock]
#[async_trait]
pub trait BasketService: Send + Sync {
    /// Current basket contents, initialising the session slot when absent.
    async fn get(&self, session: Uuid) -> Result<Vec<BasketEntry>, BasketServiceError>;

    /// Add `count` of a product, incrementing an existing entry in place.
    async fn add(
        &self,
        session: Uuid,
        product: i64,
        count: i32,
    ) -> Result<Vec<BasketEntry>, BasketServiceError>;

    /// Remove `count` of a product; the entry disappears when its quantity
    /// reaches zero.
    async fn remove(
        &self,
        session: Uuid,
        product: i64,
        count: i32,
    ) -> Result<Vec<BasketEntry>, BasketServiceError>;

    /// Empty the basket if it holds anything; reports whether it did.
    async fn clear(&self, session: Uuid) -> Result<bool, BasketServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::products::{MockProductsService, ProductsServiceError},
        sessions::InMemorySessionStore,
    };

    use super::*;

    fn make_snapshot(id: i64, price: Decimal) -> ProductSnapshot {
        ProductSnapshot {
            id,
            category: Some(1),
            price,
            count: 0,
            date: "2024-05-01T00:00:00Z".to_string(),
            title: format!("Product {id}"),
            description: "Short description".to_string(),
            full_description: "Full description".to_string(),
            free_delivery: false,
            tags: vec![],
            reviews: 0,
            rating: 4,
        }
    }

    fn make_service(products: MockProductsService) -> SessionBasketService {
        SessionBasketService::new(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(products),
            "basket".to_string(),
        )
    }

    #[tokio::test]
    async fn get_initialises_absent_basket_to_empty() -> TestResult {
        let mut products = MockProductsService::new();
        products.expect_snapshot().never();

        let sessions = Arc::new(InMemorySessionStore::new());
        let service = SessionBasketService::new(
            Arc::clone(&sessions) as Arc<dyn SessionStore>,
            Arc::new(products),
            "basket".to_string(),
        );
        let session = Uuid::new_v4();

        assert!(service.get(session).await?.is_empty());

        // The slot now exists as an empty array.
        assert_eq!(
            sessions.get(session, "basket").await?,
            Some(serde_json::json!([]))
        );

        Ok(())
    }

    #[tokio::test]
    async fn adding_same_product_twice_merges_counts() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_snapshot()
            .once()
            .withf(|id| *id == 7)
            .return_once(|id| Ok(make_snapshot(id, Decimal::from(10))));

        let service = make_service(products);
        let session = Uuid::new_v4();

        service.add(session, 7, 2).await?;
        let basket = service.add(session, 7, 3).await?;

        assert_eq!(basket.len(), 1);
        assert_eq!(basket[0].count, 5);

        Ok(())
    }

    #[tokio::test]
    async fn adding_unknown_product_propagates_lookup_failure() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_snapshot()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let service = make_service(products);

        let result = service.add(Uuid::new_v4(), 404, 1).await;

        assert!(
            matches!(
                result,
                Err(BasketServiceError::Product(ProductsServiceError::NotFound))
            ),
            "expected lookup failure, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn removing_less_than_count_decrements_entry() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_snapshot()
            .once()
            .return_once(|id| Ok(make_snapshot(id, Decimal::from(10))));

        let service = make_service(products);
        let session = Uuid::new_v4();

        service.add(session, 7, 5).await?;
        let basket = service.remove(session, 7, 2).await?;

        assert_eq!(basket.len(), 1);
        assert_eq!(basket[0].count, 3);

        Ok(())
    }

    #[tokio::test]
    async fn removing_at_least_count_deletes_entry() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_snapshot()
            .times(2)
            .returning(|id| Ok(make_snapshot(id, Decimal::from(10))));

        let service = make_service(products);
        let session = Uuid::new_v4();

        service.add(session, 7, 2).await?;
        assert!(service.remove(session, 7, 2).await?.is_empty());

        service.add(session, 7, 2).await?;
        assert!(service.remove(session, 7, 5).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn removing_unknown_product_is_a_no_op() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_snapshot()
            .once()
            .return_once(|id| Ok(make_snapshot(id, Decimal::from(10))));

        let service = make_service(products);
        let session = Uuid::new_v4();

        service.add(session, 7, 2).await?;
        let basket = service.remove(session, 999, 1).await?;

        assert_eq!(basket.len(), 1);
        assert_eq!(basket[0].count, 2);

        Ok(())
    }

    #[tokio::test]
    async fn removing_from_absent_basket_returns_empty() -> TestResult {
        let mut products = MockProductsService::new();
        products.expect_snapshot().never();

        let service = make_service(products);

        assert!(service.remove(Uuid::new_v4(), 7, 1).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn clear_reports_whether_anything_was_dropped() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_snapshot()
            .once()
            .return_once(|id| Ok(make_snapshot(id, Decimal::from(10))));

        let service = make_service(products);
        let session = Uuid::new_v4();

        assert!(!service.clear(session).await?);

        service.add(session, 7, 1).await?;

        assert!(service.clear(session).await?);
        assert!(service.get(session).await?.is_empty());
        assert!(!service.clear(session).await?);

        Ok(())
    }

    #[tokio::test]
    async fn baskets_are_scoped_per_session() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_snapshot()
            .once()
            .return_once(|id| Ok(make_snapshot(id, Decimal::from(10))));

        let service = make_service(products);

        service.add(Uuid::new_v4(), 7, 1).await?;

        assert!(service.get(Uuid::new_v4()).await?.is_empty());

        Ok(())
    }
}
