//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Default HTTP port
const DEFAULT_PORT: u16 = 5000;

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Log output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn from_env_value(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// PostgreSQL connection URL; the in-memory store is used when absent
    pub database_url: Option<String>,

    /// Token signing
    pub jwt_secret: String,
    pub expires_in: String,

    /// Password hashing work factor
    pub bcrypt_cost: u32,

    /// Return stored password hashes in account representations
    pub expose_password_hash: bool,

    /// Runtime configuration
    pub rust_log: String,
    pub log_format: LogFormat,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),

            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET is required"))?,
            expires_in: env::var("EXPIRES_IN").unwrap_or_else(|_| "1d".to_string()),

            bcrypt_cost: parse_number(
                "BCRYPT_COST",
                env::var("BCRYPT_COST").ok(),
                DEFAULT_BCRYPT_COST,
            )?,
            expose_password_hash: env::var("EXPOSE_PASSWORD_HASH")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),

            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "folio=debug,tower_http=info".to_string()),
            log_format: env::var("LOG_FORMAT")
                .map(|v| LogFormat::from_env_value(&v))
                .unwrap_or_default(),
            port: parse_number("PORT", env::var("PORT").ok(), DEFAULT_PORT)?,
        };

        Ok(config)
    }
}

/// Parse an optional numeric variable, falling back to `default` when unset
fn parse_number<T: FromStr>(name: &str, raw: Option<String>, default: T) -> Result<T> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} must be an integer, got {:?}", name, raw)),
        None => Ok(default),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
