// src/config.rs
use std::net::SocketAddr;

use secrecy::SecretString;
use thiserror::Error;

use crate::services::gemini::GeminiSettings;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Process configuration, read once before the server starts.
#[derive(Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub gemini: GeminiSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingEnv("GEMINI_API_KEY"))?;

        let mut gemini = GeminiSettings::new(SecretString::new(api_key));
        if let Some(model) = lookup("GEMINI_MODEL").filter(|v| !v.is_empty()) {
            gemini.model = model;
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL").filter(|v| !v.is_empty()) {
            gemini.base_url = base_url;
        }

        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: raw_addr.clone(),
        })?;

        Ok(Self { bind_addr, gemini })
    }
}
