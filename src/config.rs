//! Layered configuration for the search service
//!
//! Sources, in increasing precedence:
//! 1. `config/default.toml`
//! 2. `config/{RUN_MODE}.toml` (optional)
//! 3. Environment variables prefixed with `MERX__` (e.g. `MERX__SERVER__PORT`)
//!
//! A `.env` file is loaded first via dotenvy so local overrides can live
//! alongside the checkout.

use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub index: IndexConfig,
    pub links: LinkConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins. Empty means no permissive CORS headers.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: Vec::new(),
        }
    }
}

/// Names of the index collections the engine queries. Injected rather than
/// hard-coded so deployments can point at differently-named collections.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub orders_collection: String,
    pub customers_collection: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            orders_collection: "commerce-orders".to_string(),
            customers_collection: "commerce-customers".to_string(),
        }
    }
}

/// Base URLs for the navigation links embedded in projected records.
/// The record value is `<base>?target=<entity id>`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub order_target_url: String,
    pub customer_target_url: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            order_target_url: "/apps/customer-order-manager/Order".to_string(),
            customer_target_url: "/apps/customer-order-manager/Customer".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level for the service's own crates (trace, debug, info, warn, error).
    pub level: String,
    /// Emit JSON log lines instead of the human-readable format.
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: String,
    pub file_prefix: String,
    /// File rotation: daily, hourly, minutely, or never.
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_enabled: false,
            file_directory: "logs".to_string(),
            file_prefix: "merx".to_string(),
            file_rotation: "daily".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from files and environment.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("MERX")
                    .separator("__")
                    .list_separator(",")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Check invariants the rest of the service assumes.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be non-zero".to_string());
        }
        if self.index.orders_collection.trim().is_empty() {
            return Err("index.orders_collection must not be blank".to_string());
        }
        if self.index.customers_collection.trim().is_empty() {
            return Err("index.customers_collection must not be blank".to_string());
        }
        if self.links.order_target_url.trim().is_empty()
            || self.links.customer_target_url.trim().is_empty()
        {
            return Err("links.*_target_url must not be blank".to_string());
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid listen address: {e}"))
    }
}
