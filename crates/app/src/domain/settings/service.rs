//! Settings service.
//!
//! Lookups are fronted by an explicit TTL cache. The cache stores the
//! resolved result *including absence*, so a missing key is also only read
//! from the store once per window. `invalidate` drops a single key ahead of
//! its expiry.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;

use crate::{
    cache::TtlCache,
    domain::settings::{errors::SettingsServiceError, repository::SettingsRepository},
};

pub struct CachedSettingsService {
    repository: Arc<dyn SettingsRepository>,
    cache: TtlCache<String, Option<Decimal>>,
}

impl CachedSettingsService {
    #[must_use]
    pub fn new(repository: Arc<dyn SettingsRepository>, ttl: Duration) -> Self {
        Self {
            repository,
            cache: TtlCache::new(ttl),
        }
    }
}

#[async_trait]
impl SettingsService for CachedSettingsService {
    async fn get(&self, key: &str) -> Result<Option<Decimal>, SettingsServiceError> {
        if let Some(cached) = self.cache.get(&key.to_string()).await {
            return Ok(cached);
        }

        let value = self
            .repository
            .get_setting(key)
            .await?
            .map(|raw| {
                raw.parse::<Decimal>()
                    .map_err(|_| SettingsServiceError::InvalidValue {
                        key: key.to_string(),
                    })
            })
            .transpose()?;

        self.cache.insert(key.to_string(), value).await;

        Ok(value)
    }

    async fn invalidate(&self, key: &str) {
        self.cache.invalidate(&key.to_string()).await;
    }
}

#[automock]
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Resolve a site setting, consulting the cache first.
    async fn get(&self, key: &str) -> Result<Option<Decimal>, SettingsServiceError>;

    /// Drop a cached setting so the next lookup re-reads the store.
    async fn invalidate(&self, key: &str);
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::settings::repository::MockSettingsRepository;

    use super::*;

    fn service(repository: MockSettingsRepository, ttl: Duration) -> CachedSettingsService {
        CachedSettingsService::new(Arc::new(repository), ttl)
    }

    #[tokio::test]
    async fn repeated_lookups_within_window_hit_store_once() -> TestResult {
        let mut repository = MockSettingsRepository::new();

        repository
            .expect_get_setting()
            .once()
            .withf(|key| key == "express_delivery_price")
            .return_once(|_| Ok(Some("5".to_string())));

        let service = service(repository, Duration::from_secs(3600));

        assert_eq!(
            service.get("express_delivery_price").await?,
            Some(Decimal::from(5))
        );
        assert_eq!(
            service.get("express_delivery_price").await?,
            Some(Decimal::from(5))
        );

        Ok(())
    }

    #[tokio::test]
    async fn missing_key_is_cached_as_absent() -> TestResult {
        let mut repository = MockSettingsRepository::new();

        repository
            .expect_get_setting()
            .once()
            .return_once(|_| Ok(None));

        let service = service(repository, Duration::from_secs(3600));

        assert_eq!(service.get("free_delivery_min_price").await?, None);
        assert_eq!(service.get("free_delivery_min_price").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn expired_entry_reads_store_again() -> TestResult {
        let mut repository = MockSettingsRepository::new();

        repository
            .expect_get_setting()
            .times(2)
            .returning(|_| Ok(Some("2".to_string())));

        let service = service(repository, Duration::ZERO);

        service.get("default_delivery_price").await?;
        service.get("default_delivery_price").await?;

        Ok(())
    }

    #[tokio::test]
    async fn invalidate_forces_a_fresh_read() -> TestResult {
        let mut repository = MockSettingsRepository::new();

        repository
            .expect_get_setting()
            .times(2)
            .returning(|_| Ok(Some("7".to_string())));

        let service = service(repository, Duration::from_secs(3600));

        service.get("express_delivery_price").await?;
        service.invalidate("express_delivery_price").await;
        service.get("express_delivery_price").await?;

        Ok(())
    }

    #[tokio::test]
    async fn non_numeric_value_is_an_error() -> TestResult {
        let mut repository = MockSettingsRepository::new();

        repository
            .expect_get_setting()
            .once()
            .return_once(|_| Ok(Some("not a number".to_string())));

        let service = service(repository, Duration::from_secs(3600));

        let result = service.get("express_delivery_price").await;

        assert!(
            matches!(result, Err(SettingsServiceError::InvalidValue { .. })),
            "expected InvalidValue, got {result:?}"
        );

        Ok(())
    }
}
