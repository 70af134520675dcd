pub mod file;
pub mod memory;
pub mod redis_store;
pub mod store;

use std::sync::Arc;

use tracing::info;

use shared_config::{AppConfig, StorageBackend};

pub use file::FileStore;
pub use memory::MemoryStore;
pub use redis_store::RedisStore;
pub use store::{KeyValueStore, StorageError};

/// Open the backend selected by configuration.
pub async fn connect(config: &AppConfig) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    let store: Arc<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File => Arc::new(FileStore::open(&config.storage_dir).await?),
        StorageBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .filter(|url| !url.is_empty())
                .ok_or_else(|| StorageError::NotConfigured("REDIS_URL is required for the redis backend".to_string()))?;
            Arc::new(RedisStore::connect(url).await?)
        }
    };

    info!("Using {} storage backend", store.backend_name());
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_connect_memory_backend() {
        let config = AppConfig {
            storage_backend: StorageBackend::Memory,
            ..AppConfig::default()
        };
        let store = connect(&config).await.unwrap();
        assert_eq!(store.backend_name(), "memory");
    }

    #[tokio::test]
    async fn test_connect_file_backend_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            storage_backend: StorageBackend::File,
            storage_dir: dir.path().join("nested"),
            ..AppConfig::default()
        };
        let store = connect(&config).await.unwrap();
        assert_eq!(store.backend_name(), "file");
        assert!(dir.path().join("nested").is_dir());
    }

    #[tokio::test]
    async fn test_connect_redis_without_url_fails() {
        let config = AppConfig {
            storage_backend: StorageBackend::Redis,
            redis_url: None,
            ..AppConfig::default()
        };
        assert_matches!(connect(&config).await.err(), Some(StorageError::NotConfigured(_)));
    }
}
