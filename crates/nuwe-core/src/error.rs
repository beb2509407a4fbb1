//! Application error types
//!
//! The error taxonomy is deliberately small: only startup faults exist.
//! A navigation miss (anchor not present in the page) is a documented
//! non-error and never constructs a value here.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Startup fault taxonomy for the NUWE site server.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The single required external configuration value is absent. The
    /// message is the operator-facing contract and must stay deterministic.
    #[error("DATABASE_URL environment variable is not set")]
    MissingDatabaseUrl,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Check if this error should abort startup. Configuration and database
    /// faults are never retried and never degrade to a partial boot.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::MissingDatabaseUrl | Error::Config { .. } | Error::Database { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_database_url_message_is_deterministic() {
        let err = Error::MissingDatabaseUrl;
        assert_eq!(
            err.to_string(),
            "DATABASE_URL environment variable is not set"
        );
    }

    #[test]
    fn test_error_display_messages() {
        let err = Error::config("invalid bind address");
        assert_eq!(err.to_string(), "Configuration error: invalid bind address");

        let err = Error::database("connection refused");
        assert_eq!(err.to_string(), "Database error: connection refused");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_startup_faults_are_fatal() {
        assert!(Error::MissingDatabaseUrl.is_fatal());
        assert!(Error::config("bad value").is_fatal());
        assert!(Error::database("unreachable").is_fatal());
    }
}
