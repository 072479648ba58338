use anyhow::{Context, Result};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Environment variable read by [`CachedFileConfig::from_env`].
pub const MAX_CACHE_AGE_ENV: &str = "FILECACHE_MAX_CACHE_AGE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Setters, Serialize, Deserialize)]
#[setters(strip_option)]
pub struct CachedFileConfig {
    /// Maximum cache age in seconds used when a lookup doesn't override it.
    ///
    /// - `None`: cached values never expire, no age check is made
    /// - negative: cached values never expire
    /// - zero or positive: a value older than this many seconds is dropped
    ///   and re-read from disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cache_age: Option<i64>,
}

impl CachedFileConfig {
    /// Builds a config from `FILECACHE_MAX_CACHE_AGE`. An unset variable
    /// leaves the age unchecked; a value that isn't an integer is an error.
    pub fn from_env() -> Result<Self> {
        Ok(Self { max_cache_age: parse_max_cache_age(std::env::var(MAX_CACHE_AGE_ENV).ok())? })
    }
}

fn parse_max_cache_age(value: Option<String>) -> Result<Option<i64>> {
    value
        .map(|value| {
            value
                .trim()
                .parse::<i64>()
                .with_context(|| format!("Invalid {MAX_CACHE_AGE_ENV} value: {value:?}"))
        })
        .transpose()
}
