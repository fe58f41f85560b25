//! Redis cache client.

use redis::AsyncCommands;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::CacheResult;

/// Cache configuration.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Redis URL
    pub redis_url: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://localhost:6379".to_string(),
        }
    }
}

impl CacheConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            redis_url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        }
    }
}

/// Redis-backed cache client.
///
/// A miss is `Ok(None)`; only transport and protocol failures surface as
/// errors, so callers can recover a miss locally and propagate the rest.
pub struct RedisCache {
    client: redis::Client,
}

impl RedisCache {
    /// Create a new cache client.
    pub fn new(config: CacheConfig) -> CacheResult<Self> {
        let client = redis::Client::open(config.redis_url.as_str())?;
        Ok(Self { client })
    }

    /// Create from environment variables.
    pub fn from_env() -> CacheResult<Self> {
        Self::new(CacheConfig::from_env())
    }

    /// Get a raw string value. `Ok(None)` on miss.
    pub async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    /// Set a raw string value with a TTL in seconds.
    pub async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> CacheResult<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.set_ex(key, value, ttl_secs).await?;
        Ok(())
    }

    /// Get a JSON-typed value.
    ///
    /// A corrupt or undecodable entry is treated as a miss so the caller
    /// recomputes and overwrites it.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> CacheResult<Option<T>> {
        let Some(raw) = self.get(key).await? else {
            debug!(key = %key, "cache miss");
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key = %key, "cache hit");
                Ok(Some(value))
            }
            Err(e) => {
                warn!(key = %key, error = %e, "undecodable cache entry, treating as miss");
                Ok(None)
            }
        }
    }

    /// Set a JSON-typed value with a TTL in seconds.
    pub async fn set_json<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl_secs: u64,
    ) -> CacheResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set_ex(key, &raw, ttl_secs).await
    }

    /// Round-trip a PING, for readiness probes.
    pub async fn ping(&self) -> CacheResult<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}
