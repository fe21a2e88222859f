//! Profiles service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::profiles::{
        errors::ProfilesServiceError,
        models::{Profile, ProfileUpdate},
        repository::PgProfilesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProfilesService {
    db: Db,
    repository: PgProfilesRepository,
}

impl PgProfilesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProfilesRepository::new(),
        }
    }
}

#[async_trait]
impl ProfilesService for PgProfilesService {
    async fn get_profile(&self, user: i64) -> Result<Profile, ProfilesServiceError> {
        let mut tx = self.db.begin().await?;

        let profile = self.repository.get_profile(&mut tx, user).await?;

        tx.commit().await?;

        Ok(profile)
    }

    async fn update_profile(
        &self,
        user: i64,
        update: ProfileUpdate,
    ) -> Result<Profile, ProfilesServiceError> {
        let mut tx = self.db.begin().await?;

        let profile = self.repository.update_profile(&mut tx, user, &update).await?;

        tx.commit().await?;

        Ok(profile)
    }
}

#[automock]
#[async_trait]
pub trait ProfilesService: Send + Sync {
    /// Profile attached to the given external identity.
    async fn get_profile(&self, user: i64) -> Result<Profile, ProfilesServiceError>;

    /// Overwrite the caller's profile fields.
    async fn update_profile(
        &self,
        user: i64,
        update: ProfileUpdate,
    ) -> Result<Profile, ProfilesServiceError>;
}
