use async_trait::async_trait;
use bytes::Bytes;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Time-expiring blob store keyed by coordinate strings.
///
/// Last write wins. Backends that fail treat the failure as a miss.
#[async_trait]
pub trait CoordinateCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<Bytes>;

    async fn set(&self, key: &str, value: Bytes, ttl: Duration);
}

/// Returns the cached value for `key`, or runs `compute` and stores its
/// success under `key` for `ttl`. Errors are not cached.
pub async fn get_or_compute<C, F, Fut, E>(
    cache: &C,
    key: &str,
    ttl: Duration,
    compute: F,
) -> Result<Bytes, E>
where
    C: CoordinateCache + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Bytes, E>>,
{
    if let Some(hit) = cache.get(key).await {
        debug!(key, "Cache hit");
        return Ok(hit);
    }

    debug!(key, "Cache miss");
    let value = compute().await?;
    cache.set(key, value.clone(), ttl).await;
    Ok(value)
}

#[derive(Debug)]
struct Entry {
    value: Bytes,
    expires_at: Instant,
}

/// Process-local cache.
///
/// Expired entries are dropped when read and swept on every write, so the
/// map never holds more than what was written within one TTL.
#[derive(Debug, Default)]
pub struct InMemoryCoordinateCache {
    inner: RwLock<HashMap<String, Entry>>,
}

impl InMemoryCoordinateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl CoordinateCache for InMemoryCoordinateCache {
    async fn get(&self, key: &str) -> Option<Bytes> {
        {
            let guard = self.inner.read().await;
            match guard.get(key) {
                None => return None,
                Some(entry) if Instant::now() < entry.expires_at => {
                    return Some(entry.value.clone());
                }
                Some(_) => {}
            }
        }

        let mut guard = self.inner.write().await;
        // Re-check: another writer may have refreshed the entry.
        if let Some(entry) = guard.get(key) {
            if Instant::now() < entry.expires_at {
                return Some(entry.value.clone());
            }
            guard.remove(key);
        }
        None
    }

    async fn set(&self, key: &str, value: Bytes, ttl: Duration) {
        let now = Instant::now();
        let entry = Entry {
            value,
            expires_at: now + ttl,
        };
        let mut guard = self.inner.write().await;
        guard.retain(|_, e| e.expires_at > now);
        guard.insert(key.to_string(), entry);
    }
}

/// Redis-backed cache shared by every instance of the service.
#[derive(Clone)]
pub struct RedisCoordinateCache {
    conn: ConnectionManager,
    prefix: String,
}

impl RedisCoordinateCache {
    pub fn new(conn: ConnectionManager) -> Self {
        Self::with_prefix(conn, "events:map:")
    }

    pub fn with_prefix(conn: ConnectionManager, prefix: impl Into<String>) -> Self {
        Self {
            conn,
            prefix: prefix.into(),
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[async_trait]
impl CoordinateCache for RedisCoordinateCache {
    async fn get(&self, key: &str) -> Option<Bytes> {
        let mut conn = self.conn.clone();
        match conn.get::<_, Option<Vec<u8>>>(self.key(key)).await {
            Ok(value) => value.map(Bytes::from),
            Err(e) => {
                warn!(key, "Redis cache read failed: {}", e);
                None
            }
        }
    }

    async fn set(&self, key: &str, value: Bytes, ttl: Duration) {
        let mut conn = self.conn.clone();
        let seconds = ttl.as_secs().max(1);
        if let Err(e) = conn
            .set_ex::<_, _, ()>(self.key(key), value.as_ref(), seconds)
            .await
        {
            warn!(key, "Redis cache write failed: {}", e);
        }
    }
}
