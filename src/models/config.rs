//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_api_prefix() -> String {
    "/dev".to_string()
}

fn default_db_pool_size() -> u32 {
    8
}

fn default_db_busy_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    /// Signs the flash message cookies.
    pub secret: String,
    /// Mount point of the JSON API.
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    #[serde(default = "default_db_pool_size")]
    pub db_pool_size: u32,
    #[serde(default = "default_db_busy_timeout_secs")]
    pub db_busy_timeout_secs: u64,
}
