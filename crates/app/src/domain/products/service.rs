//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError,
        models::{
            CatalogQuery, Category, NewReview, Page, ProductDetail, ProductSnapshot, Review,
            SaleItem, Tag,
        },
        repository::PgProductsRepository,
    },
};

/// Page size applied when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// Upper bound on the page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn catalog(
        &self,
        query: CatalogQuery,
    ) -> Result<Page<ProductSnapshot>, ProductsServiceError> {
        let (page, limit, offset) = page_bounds(query.current_page, query.limit);

        let mut tx = self.db.begin().await?;

        let items = self
            .repository
            .catalog_page(&mut tx, &query, limit, offset)
            .await?;

        let total = self.repository.catalog_total(&mut tx, &query).await?;

        tx.commit().await?;

        Ok(Page {
            items,
            current_page: page,
            last_page: last_page(total, limit),
        })
    }

    async fn get_product(&self, product: i64) -> Result<ProductDetail, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let snapshot = self.repository.get_snapshot(&mut tx, product).await?;
        let reviews = self.repository.reviews(&mut tx, product).await?;
        let specifications = self.repository.specifications(&mut tx, product).await?;

        tx.commit().await?;

        Ok(ProductDetail {
            snapshot,
            reviews,
            specifications,
        })
    }

    async fn snapshot(&self, product: i64) -> Result<ProductSnapshot, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let snapshot = self.repository.get_snapshot(&mut tx, product).await?;

        tx.commit().await?;

        Ok(snapshot)
    }

    async fn popular(&self) -> Result<Vec<ProductSnapshot>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.popular(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn limited(&self) -> Result<Vec<ProductSnapshot>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.limited(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn banners(&self) -> Result<Vec<ProductSnapshot>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.banners(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn sales(&self, current_page: u32, limit: u32) -> Result<Page<SaleItem>, ProductsServiceError> {
        let (page, limit, offset) = page_bounds(current_page, limit);

        let mut tx = self.db.begin().await?;

        let items = self.repository.sales_page(&mut tx, limit, offset).await?;
        let total = self.repository.sales_total(&mut tx).await?;

        tx.commit().await?;

        Ok(Page {
            items,
            current_page: page,
            last_page: last_page(total, limit),
        })
    }

    async fn tags(&self, category: Option<i64>) -> Result<Vec<Tag>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let tags = self.repository.tags(&mut tx, category).await?;

        tx.commit().await?;

        Ok(tags)
    }

    async fn categories(&self) -> Result<Vec<Category>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.repository.categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn create_review(
        &self,
        product: i64,
        review: NewReview,
    ) -> Result<Vec<Review>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.create_review(&mut tx, product, &review).await?;

        let reviews = self.repository.reviews(&mut tx, product).await?;

        tx.commit().await?;

        Ok(reviews)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Filtered, sorted, paginated catalog listing.
    async fn catalog(
        &self,
        query: CatalogQuery,
    ) -> Result<Page<ProductSnapshot>, ProductsServiceError>;

    /// Product detail with its reviews and specifications.
    async fn get_product(&self, product: i64) -> Result<ProductDetail, ProductsServiceError>;

    /// Bare product snapshot, as held in baskets and order line items.
    async fn snapshot(&self, product: i64) -> Result<ProductSnapshot, ProductsServiceError>;

    /// Top products by sort index.
    async fn popular(&self) -> Result<Vec<ProductSnapshot>, ProductsServiceError>;

    /// Limited-run products.
    async fn limited(&self) -> Result<Vec<ProductSnapshot>, ProductsServiceError>;

    /// A few random products for the front-page banner.
    async fn banners(&self) -> Result<Vec<ProductSnapshot>, ProductsServiceError>;

    /// Paginated sales listing.
    async fn sales(&self, current_page: u32, limit: u32) -> Result<Page<SaleItem>, ProductsServiceError>;

    /// Tags ordered by how many products carry them.
    async fn tags(&self, category: Option<i64>) -> Result<Vec<Tag>, ProductsServiceError>;

    /// Categories with their subcategories.
    async fn categories(&self) -> Result<Vec<Category>, ProductsServiceError>;

    /// Add a review and return the product's full review list.
    async fn create_review(
        &self,
        product: i64,
        review: NewReview,
    ) -> Result<Vec<Review>, ProductsServiceError>;
}

/// Normalise pagination input into (page, limit, offset).
fn page_bounds(current_page: u32, limit: u32) -> (u32, u32, u32) {
    let page = current_page.max(1);

    let limit = if limit == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        limit.min(MAX_PAGE_SIZE)
    };

    (page, limit, (page - 1) * limit)
}

fn last_page(total: i64, limit: u32) -> u32 {
    let total = u32::try_from(total.max(0)).unwrap_or(u32::MAX);

    total.div_ceil(limit).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_bounds_defaults_page_and_limit() {
        assert_eq!(page_bounds(0, 0), (1, DEFAULT_PAGE_SIZE, 0));
    }

    #[test]
    fn page_bounds_caps_limit() {
        assert_eq!(page_bounds(1, 500), (1, MAX_PAGE_SIZE, 0));
    }

    #[test]
    fn page_bounds_computes_offset_from_page() {
        assert_eq!(page_bounds(3, 10), (3, 10, 20));
    }

    #[test]
    fn last_page_rounds_up() {
        assert_eq!(last_page(0, 30), 1);
        assert_eq!(last_page(30, 30), 1);
        assert_eq!(last_page(31, 30), 2);
    }
}
