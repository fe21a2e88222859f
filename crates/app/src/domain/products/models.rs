//! Catalog Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// The wire shape of a product, shared by the catalog, the session basket
/// and order line items.
///
/// `count` is the shared quantity column from the product row: the catalog
/// reports it as-is, the basket overwrites it with the session quantity,
/// and checkout overwrites the stored column with the ordered quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: i64,
    pub category: Option<i64>,
    pub price: Decimal,
    pub count: i32,
    pub date: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub free_delivery: bool,
    pub tags: Vec<Tag>,
    pub reviews: i64,
    pub rating: i32,
}

/// Product detail: the snapshot plus its reviews and specifications.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub snapshot: ProductSnapshot,
    pub reviews: Vec<Review>,
    pub specifications: Vec<Specification>,
}

/// Product specification line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specification {
    pub name: String,
    pub value: String,
}

/// Product review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub author: String,
    pub email: String,
    pub text: String,
    pub rate: i32,
    pub date: String,
}

/// New review submitted for a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub author: String,
    pub email: String,
    pub text: String,
    pub rate: i32,
}

/// Category with its subcategories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub title: String,
    pub subcategories: Vec<Subcategory>,
}

/// Subcategory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: i64,
    pub title: String,
}

/// A sale entry joined with its product.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleItem {
    pub id: i64,
    pub price: Decimal,
    pub sale_price: Decimal,
    pub date_from: String,
    pub date_to: String,
    pub title: String,
}

/// Catalog sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogSort {
    Date,
    #[default]
    Price,
    Rating,
    Reviews,
}

/// Catalog sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Catalog filter, sort and pagination parameters.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub name: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub free_delivery: Option<bool>,
    pub available: Option<bool>,
    pub category: Option<i64>,
    pub sort: CatalogSort,
    pub sort_type: SortDirection,
    pub current_page: u32,
    pub limit: u32,
}

/// One page of a paginated listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
}
