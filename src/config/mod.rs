use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory the front-end assets are served from.
    pub static_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Shared secret for the bearer gate on mutating endpoints. Injected
    /// into the router state at construction, never read per request.
    pub admin_token: String,
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// Development falls back to a well-known token so `cargo run` works out
    /// of the box; production refuses to start without ADMIN_TOKEN.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = parse_environment(env::var("APP_ENV").ok().as_deref());
        let admin_token = resolve_admin_token(env::var("ADMIN_TOKEN").ok(), environment)?;

        let port = match env::var("PORT") {
            Ok(v) => v.parse().map_err(|_| ConfigError::InvalidVar("PORT", v))?,
            Err(_) => 3000,
        };

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(v) => v
                .parse()
                .map_err(|_| ConfigError::InvalidVar("DATABASE_MAX_CONNECTIONS", v))?,
            Err(_) => 5,
        };

        Ok(Self {
            environment,
            server: ServerConfig {
                port,
                static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://portfolio.db".to_string()),
                max_connections,
            },
            security: SecurityConfig { admin_token },
        })
    }
}

fn parse_environment(value: Option<&str>) -> Environment {
    match value {
        Some("production") | Some("prod") => Environment::Production,
        _ => Environment::Development,
    }
}

fn resolve_admin_token(
    value: Option<String>,
    environment: Environment,
) -> Result<String, ConfigError> {
    match (value, environment) {
        (Some(token), _) if !token.is_empty() => Ok(token),
        (_, Environment::Development) => Ok("dev-token".to_string()),
        (_, Environment::Production) => Err(ConfigError::MissingVar("ADMIN_TOKEN")),
    }
}
