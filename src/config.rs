use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::Result;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub collections: CollectionsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub path: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Explicit record-type to collection-name mapping, fixed at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollectionsConfig {
    pub product: String,
    pub lead: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig { port: 8000 },
            database: DatabaseConfig {
                path: "data/trading.db".to_string(),
                name: "jaybeny".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            collections: CollectionsConfig {
                product: "product".to_string(),
                lead: "lead".to_string(),
            },
        }
    }
}

impl Config {
    /// `DATABASE_URL`, `DATABASE_NAME` and `PORT` take precedence over the
    /// values in config.yml.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("DATABASE_URL") {
            self.database.path = path;
        }
        if let Ok(name) = std::env::var("DATABASE_NAME") {
            self.database.name = name;
        }
        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!("ignoring non-numeric PORT value: {}", port),
            }
        }
    }
}

pub async fn load_config(path: &str) -> Result<Config> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
