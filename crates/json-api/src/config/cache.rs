//! Cache Config

use clap::Args;

/// Cache lifetime settings.
#[derive(Debug, Args)]
pub struct CacheConfig {
    /// How long resolved site settings stay cached, in seconds
    #[arg(long, env = "SETTINGS_CACHE_TTL_SECONDS", default_value_t = 3600)]
    pub settings_cache_ttl_seconds: u64,

    /// How long catalog page responses stay cached, in seconds
    #[arg(long, env = "PAGE_CACHE_TTL_SECONDS", default_value_t = 180)]
    pub page_cache_ttl_seconds: u64,
}
