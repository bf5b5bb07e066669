//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally seeded from a `.env` file) with defaults
//! for everything except the Google Cloud project.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

use super::error::{Error, Result};
use super::transport::HttpConfig;
use crate::domains::generation::SamplingConfig;

/// Default Gemini model.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Default Vertex AI location.
pub const DEFAULT_LOCATION: &str = "global";

/// Models that are only served from the global location.
const GLOBAL_ONLY_MODELS: &[&str] = &["gemini-3-pro-preview", "gemini-3-flash-preview"];

/// Models known to work; anything else triggers a startup warning.
const KNOWN_MODELS: &[&str] = &[
    "gemini-1.5-flash",
    "gemini-1.5-pro",
    "gemini-2.0-flash",
    "gemini-3-pro-preview",
    "gemini-3-flash-preview",
];

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub transport: HttpConfig,

    /// Vertex AI target.
    pub vertex: VertexConfig,

    /// Generation behaviour shared by all tools.
    pub generation: GenerationConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Vertex AI project, location and model.
#[derive(Clone, Serialize, Deserialize)]
pub struct VertexConfig {
    /// Google Cloud project ID.
    pub project_id: String,

    /// Vertex AI location ("global" or a region such as "us-central1").
    pub location: String,

    /// Gemini model identifier.
    pub model: String,

    /// Fixed OAuth access token; overrides Application Default Credentials.
    pub access_token: Option<String>,

    /// Service-account key file for Application Default Credentials.
    pub credentials_file: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for VertexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexConfig")
            .field("project_id", &self.project_id)
            .field("location", &self.location)
            .field("model", &self.model)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("credentials_file", &self.credentials_file)
            .finish()
    }
}

/// Generation settings fixed at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Sampling parameters sent with every request.
    pub sampling: SamplingConfig,

    /// Upper bound on a single backend call.
    pub timeout: Duration,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for VertexConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            location: DEFAULT_LOCATION.to_string(),
            model: DEFAULT_MODEL.to_string(),
            access_token: None,
            credentials_file: None,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            sampling: SamplingConfig::default(),
            timeout: Duration::from_secs(85),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "vertex-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            transport: HttpConfig::default(),
            vertex: VertexConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

impl LoggingConfig {
    /// Read the log level from `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.level = level;
        }
        config
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Fails when `GOOGLE_CLOUD_PROJECT` is missing.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(name) = var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(level) = var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Transport
        if let Some(host) = var("MCP_HTTP_HOST") {
            config.transport.host = host;
        }
        if let Some(port) = var("PORT") {
            config.transport.port = port
                .parse()
                .map_err(|_| Error::config(format!("PORT must be a port number, got '{}'", port)))?;
        }
        if let Some(cors) = var("MCP_HTTP_CORS") {
            config.transport.enable_cors = cors.to_lowercase() != "false" && cors != "0";
        }
        if let Some(grace) = var("MCP_SHUTDOWN_GRACE_SECS") {
            config.transport.shutdown_grace = parse_secs("MCP_SHUTDOWN_GRACE_SECS", &grace)?;
        }
        if let Some(read) = var("MCP_HTTP_READ_TIMEOUT_SECS") {
            config.transport.read_timeout = parse_secs("MCP_HTTP_READ_TIMEOUT_SECS", &read)?;
        }
        if let Some(request) = var("MCP_HTTP_REQUEST_TIMEOUT_SECS") {
            config.transport.request_timeout =
                parse_secs("MCP_HTTP_REQUEST_TIMEOUT_SECS", &request)?;
        }

        // Vertex AI
        config.vertex.project_id = var("GOOGLE_CLOUD_PROJECT").ok_or_else(|| {
            Error::config("GOOGLE_CLOUD_PROJECT environment variable is required")
        })?;
        if let Some(location) = var("GOOGLE_CLOUD_LOCATION") {
            config.vertex.location = location;
        }
        if let Some(model) = var("GEMINI_MODEL") {
            config.vertex.model = model;
        }
        config.vertex.access_token = var("GOOGLE_CLOUD_ACCESS_TOKEN");
        config.vertex.credentials_file = var("GOOGLE_APPLICATION_CREDENTIALS");

        if GLOBAL_ONLY_MODELS.contains(&config.vertex.model.as_str())
            && config.vertex.location != DEFAULT_LOCATION
        {
            info!(
                "Model {} requires '{}' location. Overriding configured location '{}'.",
                config.vertex.model, DEFAULT_LOCATION, config.vertex.location
            );
            config.vertex.location = DEFAULT_LOCATION.to_string();
        }

        if !KNOWN_MODELS.contains(&config.vertex.model.as_str()) {
            warn!(
                "Model '{}' is not in the known tested list. Ensure it exists in your region.",
                config.vertex.model
            );
        }

        // Generation
        if let Some(timeout) = var("MCP_GENERATION_TIMEOUT_SECS") {
            config.generation.timeout = parse_secs("MCP_GENERATION_TIMEOUT_SECS", &timeout)?;
        }

        Ok(config)
    }

    /// Log the effective configuration.
    pub fn log_summary(&self) {
        info!("Configuration:");
        info!("  Project ID: {}", self.vertex.project_id);
        info!("  Location: {}", self.vertex.location);
        info!("  Model: {}", self.vertex.model);
        info!("  Port: {}", self.transport.port);
        info!(
            "  Credentials: {}",
            if self.vertex.access_token.is_some() {
                "GOOGLE_CLOUD_ACCESS_TOKEN"
            } else {
                "application default"
            }
        );
        info!("  Generation timeout: {}s", self.generation.timeout.as_secs());
    }
}

fn parse_secs(key: &str, value: &str) -> Result<Duration> {
    value
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| Error::config(format!("{} must be a number of seconds, got '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_project_required() {
        let err = load(&[]).unwrap_err();
        assert!(err.to_string().contains("GOOGLE_CLOUD_PROJECT"));

        let err = load(&[("GOOGLE_CLOUD_PROJECT", "")]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("GOOGLE_CLOUD_PROJECT", "demo")]).unwrap();
        assert_eq!(config.vertex.project_id, "demo");
        assert_eq!(config.vertex.location, "global");
        assert_eq!(config.vertex.model, "gemini-3-pro-preview");
        assert_eq!(config.transport.port, 8080);
        assert!(config.transport.enable_cors);
        assert_eq!(config.transport.shutdown_grace, Duration::from_secs(10));
        assert_eq!(config.transport.read_timeout, Duration::from_secs(30));
        assert_eq!(config.transport.request_timeout, Duration::from_secs(90));
        assert_eq!(config.generation.timeout, Duration::from_secs(85));
        assert!(config.vertex.access_token.is_none());
        assert_eq!(config.server.name, "vertex-mcp-server");
    }

    #[test]
    fn test_gemini_3_forces_global_location() {
        let config = load(&[
            ("GOOGLE_CLOUD_PROJECT", "demo"),
            ("GOOGLE_CLOUD_LOCATION", "us-central1"),
            ("GEMINI_MODEL", "gemini-3-flash-preview"),
        ])
        .unwrap();
        assert_eq!(config.vertex.location, "global");
    }

    #[test]
    fn test_regional_location_kept_for_other_models() {
        let config = load(&[
            ("GOOGLE_CLOUD_PROJECT", "demo"),
            ("GOOGLE_CLOUD_LOCATION", "europe-west4"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
        ])
        .unwrap();
        assert_eq!(config.vertex.location, "europe-west4");
        assert_eq!(config.vertex.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_transport_overrides() {
        let config = load(&[
            ("GOOGLE_CLOUD_PROJECT", "demo"),
            ("PORT", "9090"),
            ("MCP_HTTP_CORS", "false"),
            ("MCP_SHUTDOWN_GRACE_SECS", "3"),
            ("MCP_HTTP_READ_TIMEOUT_SECS", "5"),
            ("MCP_HTTP_REQUEST_TIMEOUT_SECS", "60"),
            ("MCP_GENERATION_TIMEOUT_SECS", "30"),
        ])
        .unwrap();
        assert_eq!(config.transport.port, 9090);
        assert!(!config.transport.enable_cors);
        assert_eq!(config.transport.shutdown_grace, Duration::from_secs(3));
        assert_eq!(config.transport.read_timeout, Duration::from_secs(5));
        assert_eq!(config.transport.request_timeout, Duration::from_secs(60));
        assert_eq!(config.generation.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = load(&[("GOOGLE_CLOUD_PROJECT", "demo"), ("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_access_token_redacted_in_debug() {
        let config = load(&[
            ("GOOGLE_CLOUD_PROJECT", "demo"),
            ("GOOGLE_CLOUD_ACCESS_TOKEN", "ya29.super_secret"),
            ("GOOGLE_APPLICATION_CREDENTIALS", "/etc/sa.json"),
        ])
        .unwrap();
        assert_eq!(config.vertex.credentials_file.as_deref(), Some("/etc/sa.json"));
        let debug_str = format!("{:?}", config.vertex);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret"));
    }
}
