//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{
    FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar,
    types::Json,
};

use crate::domain::products::models::{
    CatalogQuery, CatalogSort, Category, NewReview, ProductSnapshot, Review, SaleItem,
    SortDirection, Specification, Subcategory, Tag,
};

const CATALOG_SQL: &str = include_str!("sql/catalog.sql");
const CATALOG_COUNT_SQL: &str = include_str!("sql/catalog_count.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const POPULAR_SQL: &str = include_str!("sql/popular.sql");
const LIMITED_SQL: &str = include_str!("sql/limited.sql");
const BANNERS_SQL: &str = include_str!("sql/banners.sql");
const SALES_SQL: &str = include_str!("sql/sales.sql");
const SALES_COUNT_SQL: &str = include_str!("sql/sales_count.sql");
const TAGS_SQL: &str = include_str!("sql/tags.sql");
const CATEGORIES_SQL: &str = include_str!("sql/categories.sql");
const REVIEWS_SQL: &str = include_str!("sql/reviews.sql");
const CREATE_REVIEW_SQL: &str = include_str!("sql/create_review.sql");
const SPECIFICATIONS_SQL: &str = include_str!("sql/specifications.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn catalog_page(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &CatalogQuery,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<ProductSnapshot>, sqlx::Error> {
        // Sort column and direction come from a fixed whitelist, never from
        // user input directly.
        let sql = format!(
            "{CATALOG_SQL} ORDER BY {} {} LIMIT $7 OFFSET $8",
            sort_column(filter.sort),
            sort_direction(filter.sort_type),
        );

        query_as::<Postgres, ProductSnapshot>(&sql)
            .bind(filter.name.as_deref())
            .bind(filter.min_price)
            .bind(filter.max_price)
            .bind(filter.free_delivery)
            .bind(filter.available)
            .bind(filter.category)
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn catalog_total(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &CatalogQuery,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(CATALOG_COUNT_SQL)
            .bind(filter.name.as_deref())
            .bind(filter.min_price)
            .bind(filter.max_price)
            .bind(filter.free_delivery)
            .bind(filter.available)
            .bind(filter.category)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_snapshot(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: i64,
    ) -> Result<ProductSnapshot, sqlx::Error> {
        query_as::<Postgres, ProductSnapshot>(GET_PRODUCT_SQL)
            .bind(product)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn popular(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductSnapshot>, sqlx::Error> {
        query_as::<Postgres, ProductSnapshot>(POPULAR_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn limited(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductSnapshot>, sqlx::Error> {
        query_as::<Postgres, ProductSnapshot>(LIMITED_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn banners(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductSnapshot>, sqlx::Error> {
        query_as::<Postgres, ProductSnapshot>(BANNERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn sales_page(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<SaleItem>, sqlx::Error> {
        query_as::<Postgres, SaleItem>(SALES_SQL)
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn sales_total(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(SALES_COUNT_SQL).fetch_one(&mut **tx).await
    }

    pub(crate) async fn tags(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: Option<i64>,
    ) -> Result<Vec<Tag>, sqlx::Error> {
        query_as::<Postgres, Tag>(TAGS_SQL)
            .bind(category)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Category>, sqlx::Error> {
        query_as::<Postgres, Category>(CATEGORIES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn reviews(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: i64,
    ) -> Result<Vec<Review>, sqlx::Error> {
        query_as::<Postgres, Review>(REVIEWS_SQL)
            .bind(product)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: i64,
        review: &NewReview,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_REVIEW_SQL)
            .bind(&review.author)
            .bind(&review.email)
            .bind(&review.text)
            .bind(review.rate)
            .bind(product)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn specifications(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: i64,
    ) -> Result<Vec<Specification>, sqlx::Error> {
        query_as::<Postgres, Specification>(SPECIFICATIONS_SQL)
            .bind(product)
            .fetch_all(&mut **tx)
            .await
    }
}

fn sort_column(sort: CatalogSort) -> &'static str {
    match sort {
        CatalogSort::Date => "p.date",
        CatalogSort::Price => "p.price",
        CatalogSort::Rating => "p.rating",
        CatalogSort::Reviews => "review_count",
    }
}

fn sort_direction(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "ASC",
        SortDirection::Descending => "DESC",
    }
}

impl<'r> FromRow<'r, PgRow> for ProductSnapshot {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let tags: Json<Vec<Tag>> = row.try_get("tags")?;

        Ok(Self {
            id: row.try_get("id")?,
            category: row.try_get("category_id")?,
            price: row.try_get("price")?,
            count: row.try_get("count")?,
            date: row.try_get::<SqlxTimestamp, _>("date")?.to_jiff().to_string(),
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            full_description: row.try_get("full_description")?,
            free_delivery: row.try_get("free_delivery")?,
            tags: tags.0,
            reviews: row.try_get("review_count")?,
            rating: row.try_get("rating")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for Tag {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for Category {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let subcategories: Json<Vec<Subcategory>> = row.try_get("subcategories")?;

        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            subcategories: subcategories.0,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for Review {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            author: row.try_get("author")?,
            email: row.try_get("email")?,
            text: row.try_get("text")?,
            rate: row.try_get("rate")?,
            date: row.try_get::<SqlxTimestamp, _>("date")?.to_jiff().to_string(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for Specification {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            name: row.try_get("name")?,
            value: row.try_get("value")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for SaleItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            price: row.try_get("price")?,
            sale_price: row.try_get("sale_price")?,
            date_from: row.try_get("date_from")?,
            date_to: row.try_get("date_to")?,
            title: row.try_get("title")?,
        })
    }
}
