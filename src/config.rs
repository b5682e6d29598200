//! Application configuration loaded from environment variables.
//!
//! Every variable is optional. Values only affect where the server binds,
//! how it logs, and the cosmetic identity reported in payloads.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::simulation::Identity;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port. Hosting platforms usually inject `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Port for the Prometheus exporter. Disabled when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    // === Identity ===
    /// Name reported by `/api/system` and the OpenAPI document.
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Version reported by `/api/system` and the OpenAPI document.
    #[serde(default = "default_app_version")]
    pub app_version: String,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error) or a full filter directive.
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Emit log lines as JSON.
    #[serde(default)]
    pub log_json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_app_name() -> String {
    "APM Demo API".to_string()
}

fn default_app_version() -> String {
    "1.0.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            metrics_port: None,
            app_name: default_app_name(),
            app_version: default_app_version(),
            rust_log: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(format!("HOST must be an IP address, got {:?}", self.host));
        }

        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        if self.metrics_port == Some(self.port) {
            return Err("METRICS_PORT must differ from PORT".to_string());
        }

        if self.app_name.trim().is_empty() {
            return Err("APP_NAME must not be blank".to_string());
        }

        Ok(())
    }

    /// Socket address for the HTTP server.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| AppError::InvalidConfig(format!("unparsable HOST {:?}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Socket address for the Prometheus exporter, if enabled.
    pub fn metrics_addr(&self) -> Result<Option<SocketAddr>> {
        match self.metrics_port {
            Some(port) => Ok(Some(SocketAddr::new(self.bind_addr()?.ip(), port))),
            None => Ok(None),
        }
    }

    /// Cosmetic identity reported in payloads.
    pub fn identity(&self) -> Identity {
        Identity {
            name: self.app_name.clone(),
            version: self.app_version.clone(),
        }
    }
}
