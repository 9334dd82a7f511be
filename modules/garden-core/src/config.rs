use anyhow::Result;

use crate::error::GardenError;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_JWT_ISSUER: &str = "garden-planner";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // Database
    pub database_url: String,
    pub database_max_connections: u32,

    // Server
    pub host: String,
    pub port: u16,

    // Auth
    pub jwt_secret: String,
    pub jwt_issuer: String,

    // CORS
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| GardenError::Config(format!("{key} environment variable is required")))
        };

        let port = match lookup("PORT") {
            Some(p) => p
                .parse()
                .map_err(|_| GardenError::Config(format!("PORT must be a number, got {p:?}")))?,
            None => DEFAULT_PORT,
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(n) => n.parse().map_err(|_| {
                GardenError::Config(format!("DATABASE_MAX_CONNECTIONS must be a number, got {n:?}"))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_max_connections,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            jwt_secret: required("JWT_SECRET")?,
            jwt_issuer: lookup("JWT_ISSUER").unwrap_or_else(|| DEFAULT_JWT_ISSUER.to_string()),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
