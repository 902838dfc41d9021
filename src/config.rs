// src/config.rs
use std::{env, net::SocketAddr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    mongodb_uri: String,
    database_name: String,
    listen_addr: SocketAddr,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_mongodb_uri() -> String {
    "mongodb://localhost:27017/".into()
}

fn default_database_name() -> String {
    "blog_admin_db".into()
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:8080".into(),
        "http://localhost:3000".into(),
    ]
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables, loading `.env` first
    /// when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mongodb_uri = lookup("MONGODB_URI").unwrap_or_else(default_mongodb_uri);
        if mongodb_uri.trim().is_empty() {
            return Err(ConfigError::Invalid("MONGODB_URI must not be empty".into()));
        }

        let database_name = lookup("MONGODB_DATABASE").unwrap_or_else(default_database_name);
        let database_name = database_name.trim().to_string();
        if database_name.is_empty() {
            return Err(ConfigError::Invalid(
                "MONGODB_DATABASE must not be empty".into(),
            ));
        }

        let raw_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let listen_addr = raw_addr.trim().parse::<SocketAddr>().map_err(|err| {
            ConfigError::Invalid(format!("LISTEN_ADDR `{raw_addr}` is not a socket address: {err}"))
        })?;

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            mongodb_uri,
            database_name,
            listen_addr,
            allowed_origins,
        })
    }

    pub fn mongodb_uri(&self) -> &str {
        &self.mongodb_uri
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// Origins allowed by the CORS layer. An empty list disables cross-origin access.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
