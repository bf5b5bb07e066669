//! Transport configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Add permissive cross-origin headers to every response.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,

    /// How long in-flight requests may run after a shutdown signal.
    #[serde(default = "default_shutdown_grace")]
    pub shutdown_grace: Duration,

    /// Longest time a client may take to send a request body.
    #[serde(default = "default_read_timeout")]
    pub read_timeout: Duration,

    /// Longest time a request may take from headers to response.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Duration,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_cors() -> bool {
    true
}

fn default_shutdown_grace() -> Duration {
    Duration::from_secs(10)
}

fn default_read_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(90)
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: default_host(),
            enable_cors: default_cors(),
            shutdown_grace: default_shutdown_grace(),
            read_timeout: default_read_timeout(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl HttpConfig {
    /// The `host:port` address to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        format!("HTTP on {}", self.address())
    }
}
