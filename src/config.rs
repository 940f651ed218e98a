use serde::Deserialize;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub public_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let config: Config = cfg.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if !self
            .host
            .chars()
            .all(|c| c.is_alphanumeric() || ".:-_".contains(c))
        {
            return Err(config::ConfigError::Message(
                "Invalid host format".to_string(),
            ));
        }

        if self.port < 1024 {
            return Err(config::ConfigError::Message(
                "Port must be 1024 or higher for security reasons".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub connect_timeout_secs: Option<u64>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
    pub sql_log: Option<bool>,
}

impl DatabaseSettings {
    pub fn default_from_url(url: String) -> Self {
        Self {
            url,
            max_connections: parse_env_var("DATABASE_MAX_CONNECTIONS"),
            min_connections: parse_env_var("DATABASE_MIN_CONNECTIONS"),
            connect_timeout_secs: parse_env_var("DATABASE_CONNECT_TIMEOUT_SECS"),
            acquire_timeout_secs: parse_env_var("DATABASE_ACQUIRE_TIMEOUT_SECS"),
            idle_timeout_secs: parse_env_var("DATABASE_IDLE_TIMEOUT_SECS"),
            sql_log: parse_env_var("DATABASE_SQL_LOG"),
        }
    }
}

/// Defaults consumed by the seed fixtures and lazy settings creation.
/// Every variable falls back to a hard-coded value when unset.
#[derive(Debug, Clone)]
pub struct SeedDefaults {
    pub waha_host: String,
    pub waha_api_key: String,
    pub evolution_host: String,
    pub evolution_api_key: String,
    pub company_name: String,
    pub page_title: String,
    pub logo_url: String,
    pub favicon_url: String,
    pub primary_color: String,
}

impl SeedDefaults {
    pub fn from_env() -> Self {
        Self {
            waha_host: env_or("DEFAULT_WAHA_HOST", "http://localhost:3000"),
            waha_api_key: env_or("DEFAULT_WAHA_API_KEY", ""),
            evolution_host: env_or("DEFAULT_EVOLUTION_HOST", "http://localhost:8080"),
            evolution_api_key: env_or("DEFAULT_EVOLUTION_API_KEY", ""),
            company_name: env_or("DEFAULT_COMPANY_NAME", "ZapCRM"),
            page_title: env_or("DEFAULT_PAGE_TITLE", "ZapCRM"),
            logo_url: env_or("DEFAULT_LOGO_URL", "/logo.png"),
            favicon_url: env_or("DEFAULT_FAVICON_URL", "/favicon.ico"),
            primary_color: env_or("DEFAULT_PRIMARY_COLOR", "#059669"),
        }
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

fn parse_env_var<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok().and_then(|value| value.parse::<T>().ok())
}
