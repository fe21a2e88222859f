//! State

use std::{sync::Arc, time::Duration};

use serde_json::Value;

use tradepost_app::{cache::TtlCache, context::AppContext};

pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Response cache fronting the catalog read endpoints, keyed by request
    /// path and query.
    pub(crate) pages: TtlCache<String, Value>,

    /// Name of the cookie carrying the session id.
    pub(crate) session_cookie: String,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, page_ttl: Duration, session_cookie: String) -> Self {
        Self {
            app,
            pages: TtlCache::new(page_ttl),
            session_cookie,
        }
    }

    #[must_use]
    pub(crate) fn shared(
        app: AppContext,
        page_ttl: Duration,
        session_cookie: String,
    ) -> Arc<Self> {
        Arc::new(Self::new(app, page_ttl, session_cookie))
    }
}
