//! Server configuration for the NUWE site
//!
//! Loaded from environment variables. The database connection string is the
//! single required value; everything else has a default.

use std::net::SocketAddr;
use std::path::PathBuf;

use nuwe_core::{Error, Result};

const DEFAULT_SITE_DIR: &str = "website/dist";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// PostgreSQL connection string. Required; startup aborts without it.
    pub database_url: String,
    /// Log level filter (e.g. `info`, `debug`).
    pub log_level: String,
    /// Directory holding the built website.
    pub site_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_URL` — PostgreSQL connection string (**required**)
    /// - `NUWE_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:3000`)
    /// - `PORT` — port to bind on `0.0.0.0` (deploy-platform convention)
    /// - `NUWE_LOG_LEVEL` — log filter (default: `info`)
    /// - `NUWE_SITE_DIR` — website dist directory (default: `website/dist`)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an injected variable lookup. Split out
    /// so tests stay deterministic without mutating the process environment.
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = var("DATABASE_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(Error::MissingDatabaseUrl)?;

        // Priority: NUWE_BIND_ADDR > PORT > default 127.0.0.1:3000
        let bind_addr = if let Some(addr) = var("NUWE_BIND_ADDR") {
            addr.parse()
                .map_err(|_| Error::config(format!("invalid NUWE_BIND_ADDR: {addr}")))?
        } else if let Some(port_str) = var("PORT") {
            let port: u16 = port_str
                .parse()
                .map_err(|_| Error::config(format!("invalid PORT: {port_str}")))?;
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([127, 0, 0, 1], 3000))
        };

        let log_level = var("NUWE_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let site_dir = var("NUWE_SITE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_DIR));

        Ok(Self {
            bind_addr,
            database_url,
            log_level,
            site_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars = env(pairs);
        ServerConfig::from_lookup(move |key| vars.get(key).cloned())
    }

    #[test]
    fn test_missing_database_url_fails_fast() {
        let err = from_pairs(&[]).unwrap_err();
        assert!(matches!(err, Error::MissingDatabaseUrl));
        assert_eq!(
            err.to_string(),
            "DATABASE_URL environment variable is not set"
        );
    }

    #[test]
    fn test_blank_database_url_fails_fast() {
        let err = from_pairs(&[("DATABASE_URL", "   ")]).unwrap_err();
        assert!(matches!(err, Error::MissingDatabaseUrl));
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[("DATABASE_URL", "postgres://localhost/nuwe")]).unwrap();

        assert_eq!(config.database_url, "postgres://localhost/nuwe");
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.site_dir, PathBuf::from(DEFAULT_SITE_DIR));
    }

    #[test]
    fn test_database_url_is_trimmed() {
        let config =
            from_pairs(&[("DATABASE_URL", "  postgres://localhost/nuwe  ")]).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/nuwe");
    }

    #[test]
    fn test_bind_addr_override() {
        let config = from_pairs(&[
            ("DATABASE_URL", "postgres://localhost/nuwe"),
            ("NUWE_BIND_ADDR", "0.0.0.0:8080"),
            ("PORT", "9999"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn test_port_convention_binds_all_interfaces() {
        let config = from_pairs(&[
            ("DATABASE_URL", "postgres://localhost/nuwe"),
            ("PORT", "8080"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn test_invalid_bind_addr_is_a_config_fault() {
        let err = from_pairs(&[
            ("DATABASE_URL", "postgres://localhost/nuwe"),
            ("NUWE_BIND_ADDR", "not-an-address"),
        ])
        .unwrap_err();

        assert!(matches!(err, Error::Config { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_invalid_port_is_a_config_fault() {
        let err = from_pairs(&[
            ("DATABASE_URL", "postgres://localhost/nuwe"),
            ("PORT", "http"),
        ])
        .unwrap_err();

        assert!(matches!(err, Error::Config { .. }));
    }
}
