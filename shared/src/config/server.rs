//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{non_empty, parse_or, ConfigError};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 3000,
            workers: 0,
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            host: non_empty(lookup, "HOST").unwrap_or(defaults.host),
            port: parse_or(lookup, "PORT", defaults.port)?,
            workers: parse_or(lookup, "SERVER_WORKERS", defaults.workers)?,
            max_payload_size: parse_or(lookup, "MAX_PAYLOAD_SIZE", defaults.max_payload_size)?,
        })
    }
}

/// CORS configuration
///
/// An empty origin list means any origin is accepted, which is what the
/// public website front-end relies on.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Whether every origin is allowed
    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty()
    }

    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            allowed_origins: non_empty(lookup, "ALLOWED_ORIGINS")
                .map(|v| split_list(&v))
                .unwrap_or_default(),
            max_age: parse_or(lookup, "CORS_MAX_AGE", default_max_age())?,
        })
    }
}

/// Content-Security-Policy source lists that differ between deployments
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CspConfig {
    /// Extra script sources besides 'self' and the per-request nonce
    #[serde(default = "default_script_sources")]
    pub script_sources: Vec<String>,

    /// Extra style sources besides 'self' and 'unsafe-inline'
    #[serde(default = "default_style_sources")]
    pub style_sources: Vec<String>,

    /// Extra font sources besides 'self'
    #[serde(default = "default_font_sources")]
    pub font_sources: Vec<String>,

    /// Extra connect sources besides 'self' (API hosts the page talks to)
    #[serde(default = "default_connect_sources")]
    pub connect_sources: Vec<String>,
}

impl Default for CspConfig {
    fn default() -> Self {
        Self {
            script_sources: default_script_sources(),
            style_sources: default_style_sources(),
            font_sources: default_font_sources(),
            connect_sources: default_connect_sources(),
        }
    }
}

impl CspConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            script_sources: non_empty(lookup, "CSP_SCRIPT_SRC")
                .map(|v| split_list(&v))
                .unwrap_or(defaults.script_sources),
            style_sources: non_empty(lookup, "CSP_STYLE_SRC")
                .map(|v| split_list(&v))
                .unwrap_or(defaults.style_sources),
            font_sources: non_empty(lookup, "CSP_FONT_SRC")
                .map(|v| split_list(&v))
                .unwrap_or(defaults.font_sources),
            connect_sources: non_empty(lookup, "CSP_CONNECT_SRC")
                .map(|v| split_list(&v))
                .unwrap_or(defaults.connect_sources),
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn default_max_payload_size() -> usize {
    64 * 1024 // 64 KB
}

fn default_max_age() -> usize {
    3600
}

fn default_script_sources() -> Vec<String> {
    vec![
        "https://cdnjs.cloudflare.com".to_string(),
        "https://cdn.jsdelivr.net".to_string(),
    ]
}

fn default_style_sources() -> Vec<String> {
    vec![
        "https://fonts.googleapis.com".to_string(),
        "https://cdn.jsdelivr.net".to_string(),
    ]
}

fn default_font_sources() -> Vec<String> {
    vec!["https://fonts.gstatic.com".to_string()]
}

fn default_connect_sources() -> Vec<String> {
    vec!["https://anant-server.vercel.app".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_cors_origin_list_parsing() {
        let lookup = |key: &str| {
            (key == "ALLOWED_ORIGINS")
                .then(|| "https://anantpolymers.com, https://www.anantpolymers.com,".to_string())
        };
        let config = CorsConfig::from_lookup(&lookup).unwrap();
        assert_eq!(
            config.allowed_origins,
            vec!["https://anantpolymers.com", "https://www.anantpolymers.com"]
        );
        assert!(!config.is_permissive());
    }

    #[test]
    fn test_cors_defaults_to_permissive() {
        assert!(CorsConfig::default().is_permissive());
    }

    #[test]
    fn test_csp_connect_sources_override() {
        let lookup = |key: &str| {
            (key == "CSP_CONNECT_SRC").then(|| "https://api.anantpolymers.com".to_string())
        };
        let config = CspConfig::from_lookup(&lookup);
        assert_eq!(config.connect_sources, vec!["https://api.anantpolymers.com"]);
        assert_eq!(config.font_sources, vec!["https://fonts.gstatic.com"]);
    }
}
