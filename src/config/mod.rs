use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::utils::validation::is_valid_hash;

pub mod cors;
pub mod logging;
pub mod security;

pub use cors::create_cors_layer;
pub use logging::{init_logging, LogFormat};
pub use security::create_security_headers_layer;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_TICKETING_API_URL: &str = "http://localhost:3002";
const DEFAULT_PAYMENT_API_URL: &str = "http://localhost:3000";
const DEFAULT_EVENT_ID: &str = "1";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// What the payment service is asked to charge for one ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSettings {
    pub title: String,
    pub description: String,
    pub unit_price: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Production deployments are served over HTTPS and get HSTS.
    pub production: bool,
    pub ticketing_api_url: String,
    pub payment_api_url: String,
    /// Shared admin secret, 64 hex characters.
    pub admin_hash: String,
    /// Event that storefront purchases register guests for.
    pub event_id: String,
    /// Serve ticket lookups from the in-memory store instead of the ticketing API.
    pub mock_tickets: bool,
    pub payment: PaymentSettings,
    pub cors_allowed_origins: Vec<String>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let admin_hash = lookup("ADMIN_HASH")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("ADMIN_HASH"))?;
        if !is_valid_hash(&admin_hash) {
            return Err(ConfigError::InvalidValue {
                key: "ADMIN_HASH",
                reason: "expected 64 hexadecimal characters".to_string(),
            });
        }

        let unit_price: Decimal = parse("PAYMENT_UNIT_PRICE", &var("PAYMENT_UNIT_PRICE", "1.05"))?;
        if unit_price.is_sign_negative() {
            return Err(ConfigError::InvalidValue {
                key: "PAYMENT_UNIT_PRICE",
                reason: "must not be negative".to_string(),
            });
        }

        Ok(Self {
            host: var("HOST", DEFAULT_HOST),
            port: parse("PORT", &var("PORT", &DEFAULT_PORT.to_string()))?,
            production: var("RUST_ENV", "development").to_lowercase() == "production",
            ticketing_api_url: url("TICKETING_API_URL", var("TICKETING_API_URL", DEFAULT_TICKETING_API_URL))?,
            payment_api_url: url("PAYMENT_API_URL", var("PAYMENT_API_URL", DEFAULT_PAYMENT_API_URL))?,
            admin_hash,
            event_id: var("EVENT_ID", DEFAULT_EVENT_ID),
            mock_tickets: parse("MOCK_TICKETS", &var("MOCK_TICKETS", "false"))?,
            payment: PaymentSettings {
                title: var("PAYMENT_TITLE", "Boreal Fest"),
                description: var("PAYMENT_DESCRIPTION", "Uma festa"),
                unit_price,
                currency: var("PAYMENT_CURRENCY", "BRL"),
            },
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS)
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
            log_format: parse("LOG_FORMAT", &var("LOG_FORMAT", "pretty"))?,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                key: "HOST",
                reason: e.to_string(),
            })
    }
}

fn parse<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        reason: e.to_string(),
    })
}

fn url(key: &'static str, value: String) -> Result<String, ConfigError> {
    let value = value.trim();
    let parsed = reqwest::Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        key,
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            key,
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(value.trim_end_matches('/').to_string())
}
