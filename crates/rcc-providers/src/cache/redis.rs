//! Shared store backed by a Redis server
//!
//! Writes are a single `SET key value EX ttl`. All callers share one
//! multiplexed connection, opened on first use. Any command error drops
//! that connection so the next call dials again.
//!
//! ```ignore
//! let store = RedisCacheProvider::new("redis://localhost:6379")?;
//! store.ping().await?;
//! ```

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rcc_application::ports::providers::cache::{CacheEntryConfig, CacheProvider};
use rcc_application::ports::registry::{CacheProviderConfig, CacheProviderEntry};
use rcc_domain::error::{Error, Result};
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, RedisResult};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::constants::REDIS_DEFAULT_URL;

/// Redis-backed store
///
/// Clones share one connection slot.
#[derive(Clone)]
pub struct RedisCacheProvider {
    client: Client,
    connection: Arc<Mutex<Option<MultiplexedConnection>>>,
}

impl RedisCacheProvider {
    /// Parse `url` without connecting
    ///
    /// Fails only when the URL is malformed.
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::open(url).map_err(|e| {
            Error::configuration_with_source(format!("Failed to create Redis client: {e}"), e)
        })?;

        Ok(Self {
            client,
            connection: Arc::new(Mutex::new(None)),
        })
    }

    /// `redis://{host}:{port}`
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{host}:{port}"))
    }

    /// Return the shared connection, opening it if there is none
    async fn connection(&self) -> Result<MultiplexedConnection> {
        let mut slot = self.connection.lock().await;
        if let Some(conn) = slot.as_ref() {
            return Ok(conn.clone());
        }

        let conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| Error::cache_with_source(format!("Failed to connect to Redis: {e}"), e))?;
        debug!(server = %self.server_address(), "Connected to Redis");
        *slot = Some(conn.clone());
        Ok(conn)
    }

    /// Drop the shared connection so the next command reconnects
    async fn discard_connection(&self) {
        if self.connection.lock().await.take().is_some() {
            warn!(server = %self.server_address(), "Discarded Redis connection after error");
        }
    }

    /// Run one command on the shared connection
    async fn execute<T, F, Fut>(&self, command: &'static str, op: F) -> Result<T>
    where
        F: FnOnce(MultiplexedConnection) -> Fut + Send,
        Fut: Future<Output = RedisResult<T>> + Send,
        T: Send,
    {
        let conn = self.connection().await?;
        match op(conn).await {
            Ok(value) => Ok(value),
            Err(e) => {
                self.discard_connection().await;
                Err(Error::cache_with_source(
                    format!("Redis {command} failed: {e}"),
                    e,
                ))
            }
        }
    }

    /// Whether a connection is currently held
    pub async fn is_connected(&self) -> bool {
        self.connection.lock().await.is_some()
    }

    /// `host:port` of the server, for logs
    pub fn server_address(&self) -> String {
        self.client.get_connection_info().addr().to_string()
    }
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        self.execute("GET", |mut conn| async move { conn.get(key).await })
            .await
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let ttl = config.effective_ttl().as_secs();
        self.execute("SET", |mut conn| async move {
            if ttl > 0 {
                conn.set_ex(key, value, ttl).await
            } else {
                conn.set(key, value).await
            }
        })
        .await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let deleted: i32 = self
            .execute("DEL", |mut conn| async move { conn.del(key).await })
            .await?;
        Ok(deleted > 0)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let count: i32 = self
            .execute("EXISTS", |mut conn| async move { conn.exists(key).await })
            .await?;
        Ok(count > 0)
    }

    async fn ttl(&self, key: &str) -> Result<Option<Duration>> {
        // PTTL answers -2 for a missing key and -1 for one without expiry
        let millis: i64 = self
            .execute("PTTL", |mut conn| async move { conn.pttl(key).await })
            .await?;
        Ok(u64::try_from(millis)
            .ok()
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis))
    }

    async fn ping(&self) -> Result<()> {
        let _pong: String = self
            .execute("PING", |mut conn| async move {
                redis::cmd("PING").query_async(&mut conn).await
            })
            .await?;
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheProvider")
            .field("addr", &self.server_address())
            .finish_non_exhaustive()
    }
}

fn build(config: &CacheProviderConfig) -> std::result::Result<Arc<dyn CacheProvider>, String> {
    let url = config.uri.as_deref().unwrap_or(REDIS_DEFAULT_URL);
    match RedisCacheProvider::new(url) {
        Ok(store) => Ok(Arc::new(store)),
        Err(e) => Err(format!("Failed to create Redis provider: {e}")),
    }
}

pub(crate) const REDIS_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "redis",
    description: "Redis server shared by every instance",
    factory: build,
};
