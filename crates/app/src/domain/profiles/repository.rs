//! Profiles Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::profiles::models::{Profile, ProfileUpdate};

const GET_PROFILE_SQL: &str = include_str!("sql/get_profile.sql");
const UPDATE_PROFILE_SQL: &str = include_str!("sql/update_profile.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProfilesRepository;

impl PgProfilesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_profile(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: i64,
    ) -> Result<Profile, sqlx::Error> {
        query_as::<Postgres, Profile>(GET_PROFILE_SQL)
            .bind(user)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_profile(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: i64,
        update: &ProfileUpdate,
    ) -> Result<Profile, sqlx::Error> {
        query_as::<Postgres, Profile>(UPDATE_PROFILE_SQL)
            .bind(user)
            .bind(update.full_name.as_deref())
            .bind(update.email.as_deref())
            .bind(update.phone.as_deref())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Profile {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            full_name: row.try_get("full_name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
        })
    }
}
