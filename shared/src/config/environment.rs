//! Environment configuration module

use serde::{Deserialize, Serialize};

use super::non_empty;

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    Development,
    /// Production environment
    Production,
}

impl Environment {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default log filter (trace, debug, info, warn, error) when RUST_LOG is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
        }
    }
}

impl LoggingConfig {
    /// Create logging config for environment
    pub fn for_environment(env: Environment) -> Self {
        let level = match env {
            Environment::Development => "debug",
            Environment::Production => "info",
        };
        Self {
            level: level.to_string(),
        }
    }

    pub(crate) fn from_lookup<F>(lookup: &F, env: Environment) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match non_empty(lookup, "LOG_LEVEL") {
            Some(level) => Self { level },
            None => Self::for_environment(env),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_str() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert!("staging".parse::<Environment>().is_err());
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert!("invalid".parse::<Environment>().is_err());
    }

    #[test]
    fn test_logging_config_for_environment() {
        assert_eq!(LoggingConfig::for_environment(Environment::Development).level, "debug");
        assert_eq!(LoggingConfig::for_environment(Environment::Production).level, "info");
    }

    #[test]
    fn test_log_level_override() {
        let lookup = |key: &str| (key == "LOG_LEVEL").then(|| "warn".to_string());
        let config = LoggingConfig::from_lookup(&lookup, Environment::Development);
        assert_eq!(config.level, "warn");
    }
}
