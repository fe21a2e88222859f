//! Session Config

use clap::Args;

/// Session cookie and basket slot settings.
#[derive(Debug, Args)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session id
    #[arg(long, env = "SESSION_COOKIE", default_value = "tradepost_session")]
    pub session_cookie: String,

    /// Session slot the basket is stored under
    #[arg(long, env = "BASKET_SESSION_KEY", default_value = "basket")]
    pub basket_session_key: String,
}
