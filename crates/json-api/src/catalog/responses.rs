//! Catalog response shapes, shared with the basket and order endpoints.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use tradepost_app::domain::products::models::{
    Category, Page, ProductDetail, ProductSnapshot, Review, SaleItem, Specification, Subcategory,
    Tag,
};

/// Monetary amounts cross the wire as JSON numbers.
pub(crate) fn money(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Tag Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TagResponse {
    pub id: i64,
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

/// Product Response
///
/// The product snapshot shape shared by the catalog, basket and order
/// endpoints; `count` carries whichever quantity the context gives it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    pub id: i64,
    pub category: Option<i64>,
    pub price: f64,
    pub count: i32,
    pub date: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub free_delivery: bool,
    pub tags: Vec<TagResponse>,
    pub reviews: i64,
    pub rating: i32,
}

impl From<ProductSnapshot> for ProductResponse {
    fn from(snapshot: ProductSnapshot) -> Self {
        Self {
            id: snapshot.id,
            category: snapshot.category,
            price: money(snapshot.price),
            count: snapshot.count,
            date: snapshot.date,
            title: snapshot.title,
            description: snapshot.description,
            full_description: snapshot.full_description,
            free_delivery: snapshot.free_delivery,
            tags: snapshot.tags.into_iter().map(TagResponse::from).collect(),
            reviews: snapshot.reviews,
            rating: snapshot.rating,
        }
    }
}

/// Review Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    pub author: String,
    pub email: String,
    pub text: String,
    pub rate: i32,
    pub date: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            author: review.author,
            email: review.email,
            text: review.text,
            rate: review.rate,
            date: review.date,
        }
    }
}

/// Specification Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SpecificationResponse {
    pub name: String,
    pub value: String,
}

impl From<Specification> for SpecificationResponse {
    fn from(specification: Specification) -> Self {
        Self {
            name: specification.name,
            value: specification.value,
        }
    }
}

/// Product Detail Response
///
/// The snapshot shape with `reviews` expanded into the review list plus the
/// product's specifications.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductDetailResponse {
    pub id: i64,
    pub category: Option<i64>,
    pub price: f64,
    pub count: i32,
    pub date: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub free_delivery: bool,
    pub tags: Vec<TagResponse>,
    pub reviews: Vec<ReviewResponse>,
    pub rating: i32,
    pub specifications: Vec<SpecificationResponse>,
}

impl From<ProductDetail> for ProductDetailResponse {
    fn from(detail: ProductDetail) -> Self {
        let snapshot = detail.snapshot;

        Self {
            id: snapshot.id,
            category: snapshot.category,
            price: money(snapshot.price),
            count: snapshot.count,
            date: snapshot.date,
            title: snapshot.title,
            description: snapshot.description,
            full_description: snapshot.full_description,
            free_delivery: snapshot.free_delivery,
            tags: snapshot.tags.into_iter().map(TagResponse::from).collect(),
            reviews: detail.reviews.into_iter().map(ReviewResponse::from).collect(),
            rating: snapshot.rating,
            specifications: detail
                .specifications
                .into_iter()
                .map(SpecificationResponse::from)
                .collect(),
        }
    }
}

/// Subcategory Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubcategoryResponse {
    pub id: i64,
    pub title: String,
}

impl From<Subcategory> for SubcategoryResponse {
    fn from(subcategory: Subcategory) -> Self {
        Self {
            id: subcategory.id,
            title: subcategory.title,
        }
    }
}

/// Category Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    pub id: i64,
    pub title: String,
    pub subcategories: Vec<SubcategoryResponse>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            title: category.title,
            subcategories: category
                .subcategories
                .into_iter()
                .map(SubcategoryResponse::from)
                .collect(),
        }
    }
}

/// Sale Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaleResponse {
    pub id: i64,
    pub price: f64,
    pub sale_price: f64,
    pub date_from: String,
    pub date_to: String,
    pub title: String,
}

impl From<SaleItem> for SaleResponse {
    fn from(sale: SaleItem) -> Self {
        Self {
            id: sale.id,
            price: money(sale.price),
            sale_price: money(sale.sale_price),
            date_from: sale.date_from,
            date_to: sale.date_to,
            title: sale.title,
        }
    }
}

/// Pagination envelope for the catalog and sales listings.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageResponse<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
}

impl<T, U: From<T>> From<Page<T>> for PageResponse<U> {
    fn from(page: Page<T>) -> Self {
        Self {
            items: page.items.into_iter().map(U::from).collect(),
            current_page: page.current_page,
            last_page: page.last_page,
        }
    }
}
