//! Catalog Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::prelude::*;
use serde_json::Value;

use tradepost_app::domain::products::models::{CatalogQuery, CatalogSort, SortDirection};

use crate::{
    catalog::{
        errors::into_status_error,
        handlers::{cache_key, respond_cached},
        responses::{PageResponse, ProductResponse},
    },
    extensions::*,
    state::State,
};

/// Catalog Handler
///
/// Filtered, sorted, paginated product listing served through the page
/// cache.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Value>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let key = cache_key(req);
    let query = parse_query(req);

    respond_cached(state, key, async {
        let page = state
            .app
            .products
            .catalog(query)
            .await
            .map_err(into_status_error)?;

        let response: PageResponse<ProductResponse> = page.into();

        serde_json::to_value(response).or_500("failed to serialise catalog page")
    })
    .await
}

fn parse_query(req: &Request) -> CatalogQuery {
    CatalogQuery {
        name: req.query::<String>("name"),
        min_price: decimal_param(req, "minPrice"),
        max_price: decimal_param(req, "maxPrice"),
        free_delivery: bool_param(req, "freeDelivery"),
        available: bool_param(req, "available"),
        category: req.query::<i64>("category"),
        sort: match req.query::<String>("sort").as_deref() {
            Some("date") => CatalogSort::Date,
            Some("rating") => CatalogSort::Rating,
            Some("reviews") => CatalogSort::Reviews,
            _ => CatalogSort::Price,
        },
        sort_type: if req.query::<String>("sortType").as_deref() == Some("dec") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        },
        current_page: req.query::<u32>("currentPage").unwrap_or(1),
        limit: req.query::<u32>("limit").unwrap_or(0),
    }
}

fn decimal_param(req: &Request, name: &str) -> Option<Decimal> {
    req.query::<String>(name)?.parse().ok()
}

fn bool_param(req: &Request, name: &str) -> Option<bool> {
    match req.query::<String>(name)?.as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tradepost_app::domain::products::{MockProductsService, models::Page};

    use crate::test_helpers::{MockApp, make_service, mock_state, make_snapshot};

    use super::*;

    fn catalog_service(products: MockProductsService) -> Service {
        let (state, _sessions) = mock_state(MockApp {
            products,
            ..MockApp::default()
        });

        make_service(&state, Router::with_path("catalog").get(handler))
    }

    #[tokio::test]
    async fn catalog_returns_paginated_items() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_catalog().once().return_once(|_| {
            Ok(Page {
                items: vec![make_snapshot(1, "9.99")],
                current_page: 1,
                last_page: 1,
            })
        });

        let mut res = TestClient::get("http://example.com/catalog")
            .send(&catalog_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Value = res.take_json().await?;

        assert_eq!(body["currentPage"], 1);
        assert_eq!(body["lastPage"], 1);
        assert_eq!(body["items"][0]["id"], 1);
        assert_eq!(body["items"][0]["price"], 9.99);

        Ok(())
    }

    #[tokio::test]
    async fn repeated_requests_are_served_from_the_page_cache() -> TestResult {
        let mut products = MockProductsService::new();

        // One backing call for two identical requests.
        products.expect_catalog().once().return_once(|_| {
            Ok(Page {
                items: vec![],
                current_page: 1,
                last_page: 1,
            })
        });

        let service = catalog_service(products);

        let first = TestClient::get("http://example.com/catalog")
            .send(&service)
            .await;
        let second = TestClient::get("http://example.com/catalog")
            .send(&service)
            .await;

        assert_eq!(first.status_code, Some(StatusCode::OK));
        assert_eq!(second.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn filters_and_sort_are_forwarded() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_catalog()
            .once()
            .withf(|query| {
                query.name.as_deref() == Some("phone")
                    && query.min_price == Some(Decimal::from(5))
                    && query.free_delivery == Some(true)
                    && query.sort == CatalogSort::Rating
                    && query.sort_type == SortDirection::Descending
                    && query.current_page == 2
                    && query.limit == 10
            })
            .return_once(|_| {
                Ok(Page {
                    items: vec![],
                    current_page: 2,
                    last_page: 2,
                })
            });

        let res = TestClient::get(
            "http://example.com/catalog?name=phone&minPrice=5&freeDelivery=true&sort=rating&sortType=dec&currentPage=2&limit=10",
        )
        .send(&catalog_service(products))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
