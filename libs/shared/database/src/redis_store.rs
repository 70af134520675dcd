use async_trait::async_trait;
use deadpool_redis::{Config, Connection, Pool, Runtime};
use redis::AsyncCommands;
use tracing::{debug, info};

use crate::store::{validate_key, KeyValueStore, StorageError};

pub struct RedisStore {
    pool: Pool,
    prefix: String,
}

impl RedisStore {
    pub async fn connect(redis_url: &str) -> Result<Self, StorageError> {
        Self::connect_with_prefix(redis_url, "clinic:").await
    }

    /// Keys are stored as `<prefix><key>` so several deployments can share one instance.
    pub async fn connect_with_prefix(redis_url: &str, prefix: &str) -> Result<Self, StorageError> {
        let cfg = Config::from_url(redis_url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| StorageError::Pool(format!("Pool creation error: {}", e)))?;

        let store = Self {
            pool,
            prefix: prefix.to_string(),
        };

        let mut conn = store.get_connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        info!("Redis key-value store initialized successfully");

        Ok(store)
    }

    async fn get_connection(&self) -> Result<Connection, StorageError> {
        self.pool
            .get()
            .await
            .map_err(|e| StorageError::Pool(format!("Connection error: {}", e)))
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let mut conn = self.get_connection().await?;
        let value: Option<String> = conn.get(self.namespaced(key)).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut conn = self.get_connection().await?;
        let _: () = conn.set(self.namespaced(key), value).await?;
        debug!("Stored {} bytes under {}", value.len(), self.namespaced(key));
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut conn = self.get_connection().await?;
        let _: () = conn.del(self.namespaced(key)).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
