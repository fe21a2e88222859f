//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use uuid::Uuid;

const SESSION_UUID_KEY: &str = "session_uuid";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_session_uuid(&mut self, session: Uuid);

    fn session_uuid_or_500(&self) -> Result<Uuid, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_session_uuid(&mut self, session: Uuid) {
        self.insert(SESSION_UUID_KEY, session);
    }

    fn session_uuid_or_500(&self) -> Result<Uuid, StatusError> {
        self.get::<Uuid>(SESSION_UUID_KEY)
            .copied()
            .map_err(|_ignored| StatusError::internal_server_error())
    }
}
