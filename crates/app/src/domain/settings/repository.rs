//! Settings Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::query_scalar;

use crate::database::Db;

const GET_SETTING_SQL: &str = include_str!("sql/get_setting.sql");

/// Raw access to the settings key/value table. A trait so the cached
/// service can be exercised against a mock store.
#[automock]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Raw stored value for a key, if the key exists.
    async fn get_setting(&self, key: &str) -> Result<Option<String>, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgSettingsRepository {
    db: Db,
}

impl PgSettingsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    async fn get_setting(&self, key: &str) -> Result<Option<String>, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let value = query_scalar(GET_SETTING_SQL)
            .bind(key)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(value)
    }
}
