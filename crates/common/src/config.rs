//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Default HTTP port
const DEFAULT_PORT: u16 = 3000;

/// Default size of the Postgres connection pool
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Maximum number of pooled database connections
    pub database_max_connections: u32,

    /// HS256 secret used to verify bearer tokens
    pub jwt_secret: String,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from a variable lookup
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            database_url: var("DATABASE_URL")
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required"))?,
            database_max_connections: var("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),

            jwt_secret: var("JWT_SECRET")
                .ok_or_else(|| anyhow::anyhow!("JWT_SECRET is required"))?,

            rust_log: var("RUST_LOG").unwrap_or_else(|| "jobly=debug".to_string()),
            port: parse_port(var("PORT").as_deref()),
        })
    }
}

/// Parse a port value, falling back to the default on absence or garbage
fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT)
}
