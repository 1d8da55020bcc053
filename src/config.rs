//! # Service Configuration
//!
//! Environment-based configuration with defaults, loaded once at startup and
//! passed explicitly to the components that need it.

use std::env;

/// Process configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database file (default: "diet_api.db")
    pub db_path: String,

    /// Host to bind to (default: "0.0.0.0")
    pub host: String,

    /// Port to bind to (default: 8080)
    pub port: u16,
}

impl Config {
    /// Load configuration from `DIET_DB_PATH`, `HOST` and `PORT`
    pub fn from_env() -> Self {
        Self {
            db_path: env_or("DIET_DB_PATH", "diet_api.db"),
            host: env_or("HOST", "0.0.0.0"),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Socket address string for the listener
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: "diet_api.db".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(val) if !val.is_empty() => val,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.db_path, "diet_api.db");
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_socket_addr_formats_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
    }
}
