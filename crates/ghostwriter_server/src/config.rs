//! Service configuration.
//!
//! Layered assembly via the `config` crate: an optional TOML file first,
//! then environment variables prefixed `GHOSTWRITER_` (double underscore
//! separates sections, e.g. `GHOSTWRITER_SERVER__PORT`). Secrets are
//! expected from the environment in production.

use config::{Config, Environment, File};
use ghostwriter_error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Complete service configuration.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct GhostwriterConfig {
    /// HTTP listener settings
    #[serde(default)]
    server: ServerSection,
    /// PostgreSQL settings
    database: DatabaseSection,
    /// Completion provider settings
    generation: GenerationSection,
    /// Image search settings
    #[serde(default)]
    image: ImageSection,
    /// Session verification settings
    auth: AuthSection,
}

impl GhostwriterConfig {
    /// Assemble configuration from an optional TOML file plus environment.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending field when a required value
    /// is missing or malformed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        } else {
            builder = builder.add_source(File::with_name("ghostwriter").required(false));
        }
        builder = builder.add_source(
            Environment::with_prefix("GHOSTWRITER")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| ConfigError::new(e.to_string()))
    }

    /// Listener socket address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct ServerSection {
    /// Bind host
    #[serde(default = "default_host")]
    host: String,
    /// Bind port
    #[serde(default = "default_port")]
    port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// PostgreSQL settings.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct DatabaseSection {
    /// Connection URL
    url: String,
    /// Pool size
    #[serde(default = "default_pool_size")]
    max_connections: u32,
}

/// Completion provider settings.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct GenerationSection {
    /// Bearer key for the provider
    api_key: String,
    /// API base, e.g. `https://api.openai.com/v1`
    #[serde(default = "default_generation_base_url")]
    base_url: String,
    /// Default model identifier
    #[serde(default = "default_model")]
    model: String,
    /// Provider label for logging
    #[serde(default = "default_provider")]
    provider: String,
    /// Sampling temperature
    #[serde(default)]
    temperature: Option<f32>,
    /// Token budget per completion
    #[serde(default)]
    max_tokens: Option<u32>,
}

/// Image search settings.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct ImageSection {
    /// Client id for the image API; empty disables real lookups
    #[serde(default)]
    api_key: String,
    /// Search API base
    #[serde(default = "default_image_base_url")]
    base_url: String,
    /// URL used whenever search fails
    #[serde(default = "default_fallback_url")]
    fallback_url: String,
}

impl Default for ImageSection {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_image_base_url(),
            fallback_url: default_fallback_url(),
        }
    }
}

/// Session verification settings.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct AuthSection {
    /// HS256 secret shared with the session issuer
    session_secret: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_pool_size() -> u32 {
    10
}

fn default_generation_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_image_base_url() -> String {
    "https://api.unsplash.com".to_string()
}

fn default_fallback_url() -> String {
    "https://images.unsplash.com/photo-1455390582262-044cdead277a".to_string()
}
