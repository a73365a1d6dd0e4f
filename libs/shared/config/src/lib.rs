use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Where the repositories keep their rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    Memory,
    Supabase,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "in_memory" | "in-memory" => Ok(Self::Memory),
            "supabase" | "postgrest" => Ok(Self::Supabase),
            other => Err(format!("unknown storage backend: {}", other)),
        }
    }
}

/// Status returned when a create request collides with an existing name.
///
/// Existing clients expect `404`; `409` is the semantically correct code and
/// can be opted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateNameStatus {
    NotFound,
    Conflict,
}

impl FromStr for DuplicateNameStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "not_found" | "404" => Ok(Self::NotFound),
            "conflict" | "409" => Ok(Self::Conflict),
            other => Err(format!("unknown duplicate name status: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_addr: String,
    pub api_version: String,
    pub storage_backend: StorageBackend,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub duplicate_name_status: DuplicateNameStatus,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_addr: "0.0.0.0:3000".to_string(),
            api_version: "1".to_string(),
            storage_backend: StorageBackend::Memory,
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            duplicate_name_status: DuplicateNameStatus::NotFound,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            server_addr: env::var("SERVER_ADDR")
                .unwrap_or_else(|_| {
                    warn!("SERVER_ADDR not set, using {}", defaults.server_addr);
                    defaults.server_addr.clone()
                }),
            api_version: env::var("API_VERSION")
                .unwrap_or_else(|_| defaults.api_version.clone()),
            storage_backend: parse_or_default("STORAGE_BACKEND", defaults.storage_backend),
            supabase_url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| String::new()),
            supabase_anon_key: env::var("SUPABASE_ANON_PUBLIC_KEY")
                .unwrap_or_else(|_| String::new()),
            duplicate_name_status: parse_or_default(
                "DUPLICATE_NAME_STATUS",
                defaults.duplicate_name_status,
            ),
        };

        if config.storage_backend == StorageBackend::Supabase && !config.is_supabase_configured() {
            warn!("Supabase backend selected but SUPABASE_URL or SUPABASE_ANON_PUBLIC_KEY is missing");
        }

        config
    }

    pub fn is_supabase_configured(&self) -> bool {
        !self.supabase_url.is_empty() && !self.supabase_anon_key.is_empty()
    }

    /// Route prefix every versioned endpoint is nested under, e.g. `/api/v1`.
    pub fn api_prefix(&self) -> String {
        format!("/api/v{}", self.api_version)
    }
}

fn parse_or_default<T>(key: &str, default: T) -> T
where
    T: FromStr<Err = String> + Copy,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e: String| {
            warn!("{} is invalid ({}), using default", key, e);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.api_prefix(), "/api/v1");
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.duplicate_name_status, DuplicateNameStatus::NotFound);
        assert!(!config.is_supabase_configured());
    }

    #[test]
    fn test_storage_backend_parsing() {
        assert_eq!("memory".parse::<StorageBackend>(), Ok(StorageBackend::Memory));
        assert_eq!(" Supabase ".parse::<StorageBackend>(), Ok(StorageBackend::Supabase));
        assert!("sqlite".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_duplicate_name_status_parsing() {
        assert_eq!("409".parse::<DuplicateNameStatus>(), Ok(DuplicateNameStatus::Conflict));
        assert_eq!("not_found".parse::<DuplicateNameStatus>(), Ok(DuplicateNameStatus::NotFound));
        assert!("teapot".parse::<DuplicateNameStatus>().is_err());
    }

    #[test]
    fn test_api_prefix_follows_version() {
        let config = AppConfig {
            api_version: "2".to_string(),
            ..AppConfig::default()
        };

        assert_eq!(config.api_prefix(), "/api/v2");
    }
}
