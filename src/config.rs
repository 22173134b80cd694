use std::env;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(AppError::config(format!(
                "Invalid STORAGE value {other:?} (expected sqlite or memory)"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub storage: StorageBackend,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = match lookup("HOST") {
            Some(h) => h
                .parse()
                .map_err(|_| AppError::config(format!("Invalid HOST value {h:?}")))?,
            None => IpAddr::from([127, 0, 0, 1]),
        };

        let port = match lookup("PORT") {
            Some(p) => p
                .parse()
                .map_err(|_| AppError::config(format!("Invalid PORT value {p:?}")))?,
            None => 3000,
        };

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(n) => n
                .parse()
                .map_err(|_| AppError::config(format!("Invalid DB_MAX_CONNECTIONS value {n:?}")))?,
            None => 5,
        };

        let storage = match lookup("STORAGE") {
            Some(s) => s.parse()?,
            None => StorageBackend::Sqlite,
        };

        Ok(Self {
            host,
            port,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://products.db?mode=rwc".to_string()),
            max_connections,
            storage,
        })
    }
}
