//! App Context

use std::{sync::Arc, time::Duration};

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        basket::{BasketService, SessionBasketService},
        orders::{OrdersService, PgOrdersService},
        payments::{PaymentsService, PgPaymentsService},
        products::{PgProductsService, ProductsService},
        profiles::{PgProfilesService, ProfilesService},
        settings::{CachedSettingsService, PgSettingsRepository, SettingsService},
    },
    sessions::{InMemorySessionStore, SessionStore},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Knobs the server layer feeds in from its configuration.
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Session slot the basket lives under.
    pub basket_session_key: String,

    /// How long resolved site settings stay cached.
    pub settings_cache_ttl: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            basket_session_key: "basket".to_string(),
            settings_cache_ttl: Duration::from_secs(3600),
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub basket: Arc<dyn BasketService>,
    pub orders: Arc<dyn OrdersService>,
    pub payments: Arc<dyn PaymentsService>,
    pub profiles: Arc<dyn ProfilesService>,
    pub settings: Arc<dyn SettingsService>,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        options: AppOptions,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        let products: Arc<dyn ProductsService> = Arc::new(PgProductsService::new(db.clone()));

        let basket = Arc::new(SessionBasketService::new(
            Arc::clone(&sessions),
            Arc::clone(&products),
            options.basket_session_key,
        ));

        let settings = Arc::new(CachedSettingsService::new(
            Arc::new(PgSettingsRepository::new(db.clone())),
            options.settings_cache_ttl,
        ));

        Ok(Self {
            products,
            basket,
            orders: Arc::new(PgOrdersService::new(db.clone())),
            payments: Arc::new(PgPaymentsService::new(db.clone())),
            profiles: Arc::new(PgProfilesService::new(db)),
            settings,
            sessions,
        })
    }
}
