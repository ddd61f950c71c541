use std::{net::SocketAddr, str::FromStr};

use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_ACCESS_TOKEN_TTL_MINUTES: i64 = 15;
const DEFAULT_REFRESH_TOKEN_TTL_DAYS: i64 = 30;

/// Deployment environment, selecting the default log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Staging,
    Production,
    Testing,
}

impl AppEnv {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(self) -> &'static str {
        match self {
            Self::Development | Self::Testing => "debug",
            Self::Staging | Self::Production => "info",
        }
    }
}

impl FromStr for AppEnv {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            "testing" => Ok(Self::Testing),
            _ => Err(()),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub jwt_secret_key: String,
    pub bind_address: SocketAddr,
    pub app_env: AppEnv,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
    /// Single allowed CORS origin; any origin is allowed when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret_key: required("JWT_SECRET_KEY")?,
            bind_address: parsed("BIND_ADDRESS", DEFAULT_BIND_ADDRESS.parse().ok())?,
            app_env: parsed("APP_ENV", Some(AppEnv::Development))?,
            access_token_ttl: Duration::minutes(parsed(
                "ACCESS_TOKEN_TTL_MINUTES",
                Some(DEFAULT_ACCESS_TOKEN_TTL_MINUTES),
            )?),
            refresh_token_ttl: Duration::days(parsed(
                "REFRESH_TOKEN_TTL_DAYS",
                Some(DEFAULT_REFRESH_TOKEN_TTL_DAYS),
            )?),
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.is_empty()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Parses an optional variable, falling back to `default` when unset.
fn parsed<T: FromStr>(name: &str, default: Option<T>) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => default.ok_or_else(|| ConfigError::MissingEnvVar(name.to_string())),
    }
}
