use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

pub const DEFAULT_APPOINTMENTS_KEY: &str = "appointments";
pub const DEFAULT_MAX_SYMPTOM_CHARS: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
    Redis,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "redis" => Ok(StorageBackend::Redis),
            other => Err(format!("unknown storage backend: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: IpAddr,
    pub server_port: u16,
    pub storage_backend: StorageBackend,
    pub storage_dir: PathBuf,
    pub redis_url: Option<String>,
    pub appointments_key: String,
    pub doctor_roster_path: Option<PathBuf>,
    pub max_symptom_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            server_port: 3000,
            storage_backend: StorageBackend::File,
            storage_dir: PathBuf::from("./data"),
            redis_url: None,
            appointments_key: DEFAULT_APPOINTMENTS_KEY.to_string(),
            doctor_roster_path: None,
            max_symptom_chars: DEFAULT_MAX_SYMPTOM_CHARS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            server_host: parse_var("SERVER_HOST", defaults.server_host),
            server_port: parse_var("SERVER_PORT", defaults.server_port),
            storage_backend: parse_var("STORAGE_BACKEND", defaults.storage_backend),
            storage_dir: env::var("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("STORAGE_DIR not set, using default");
                    defaults.storage_dir.clone()
                }),
            redis_url: env::var("REDIS_URL").ok(),
            appointments_key: env::var("APPOINTMENTS_KEY")
                .unwrap_or_else(|_| defaults.appointments_key.clone()),
            doctor_roster_path: env::var("DOCTOR_ROSTER_PATH").ok().map(PathBuf::from),
            max_symptom_chars: parse_var("MAX_SYMPTOM_CHARS", defaults.max_symptom_chars),
        };

        if !config.is_storage_configured() {
            warn!("Redis storage selected but REDIS_URL is not set");
        }

        config
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }

    pub fn is_storage_configured(&self) -> bool {
        match self.storage_backend {
            StorageBackend::Redis => self.redis_url.as_deref().is_some_and(|url| !url.is_empty()),
            StorageBackend::Memory | StorageBackend::File => true,
        }
    }
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default {:?}", name, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {:?}", name, default);
            default
        }
    }
}
