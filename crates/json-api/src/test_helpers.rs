//! Test helpers.

use std::{sync::Arc, time::Duration};

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use serde_json::json;
use uuid::Uuid;

use tradepost_app::{
    context::AppContext,
    domain::{
        basket::MockBasketService,
        orders::{
            MockOrdersService,
            models::{DeliveryType, Order, OrderStatus, PaymentType},
        },
        payments::MockPaymentsService,
        products::{MockProductsService, models::ProductSnapshot},
        profiles::{MockProfilesService, models::Profile},
        settings::MockSettingsService,
    },
    sessions::{InMemorySessionStore, SessionStore, SessionStoreError, USER_ID_KEY},
};

use crate::{extensions::*, state::State};

pub(crate) type SharedSessions = Arc<InMemorySessionStore>;

pub(crate) const TEST_SESSION: Uuid = Uuid::nil();

/// Mocked service set; unset expectations panic when called.
#[derive(Default)]
pub(crate) struct MockApp {
    pub products: MockProductsService,
    pub basket: MockBasketService,
    pub orders: MockOrdersService,
    pub payments: MockPaymentsService,
    pub profiles: MockProfilesService,
    pub settings: MockSettingsService,
}

pub(crate) fn mock_state(app: MockApp) -> (Arc<State>, SharedSessions) {
    let sessions: SharedSessions = Arc::new(InMemorySessionStore::new());

    let context = AppContext {
        products: Arc::new(app.products),
        basket: Arc::new(app.basket),
        orders: Arc::new(app.orders),
        payments: Arc::new(app.payments),
        profiles: Arc::new(app.profiles),
        settings: Arc::new(app.settings),
        sessions: Arc::clone(&sessions) as Arc<dyn SessionStore>,
    };

    (
        Arc::new(State::new(
            context,
            Duration::from_secs(180),
            "tradepost_session".to_string(),
        )),
        sessions,
    )
}

#[salvo::handler]
pub(crate) async fn inject_session(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_session_uuid(TEST_SESSION);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_service(state: &Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(Arc::clone(state)))
            .hoop(inject_session)
            .push(route),
    )
}

/// Record the authenticated user in the test session.
pub(crate) async fn authenticate(
    sessions: &SharedSessions,
    user: i64,
) -> Result<(), SessionStoreError> {
    sessions.set(TEST_SESSION, USER_ID_KEY, json!(user)).await
}

pub(crate) fn make_snapshot(id: i64, price: &str) -> ProductSnapshot {
    ProductSnapshot {
        id,
        category: Some(1),
        price: price.parse().unwrap_or_default(),
        count: 1,
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

pub(crate) fn make_order(id: i64) -> Order {
    Order {
        id,
        date: Timestamp::UNIX_EPOCH,
        full_name: Some("Jane Roe".to_string()),
        email: None,
        phone: None,
        city: None,
        address: None,
        delivery_type: DeliveryType::Ordinary,
        payment_type: PaymentType::Online,
        status: OrderStatus::InProcess,
        products: vec![],
    }
}

pub(crate) fn make_profile(user: i64, full_name: &str) -> Profile {
    Profile {
        id: 1,
        user_id: user,
        full_name: full_name.to_string(),
        email: Some("jane@example.com".to_string()),
        phone: Some("5551234".to_string()),
    }
}

/// Every pricing settings key resolves to its static default.
pub(crate) fn settings_with_defaults(settings: &mut MockSettingsService) {
    settings.expect_get().times(3).returning(|_| Ok(None));
}
