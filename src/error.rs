//! EcoAdvice client error types

use thiserror::Error;

/// Errors that can occur while talking to the EcoAdvice API
#[derive(Error, Debug)]
pub enum AdviceError {
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{message}")]
    Server { message: String },

    #[error("HTTP error: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("JSON serialization error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl AdviceError {
    /// True for errors reported by the server itself (an explicit `error`
    /// stream message), as opposed to transport-level failures.
    pub fn is_server_error(&self) -> bool {
        matches!(self, AdviceError::Server { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = AdviceError::Config {
            reason: "could not determine home directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Configuration error: could not determine home directory"
        );
    }

    #[test]
    fn test_api_error_display() {
        let err = AdviceError::Api {
            status: 404,
            message: "No home found!".to_string(),
        };
        assert_eq!(err.to_string(), "No home found!");
    }

    #[test]
    fn test_server_error_display() {
        let err = AdviceError::Server {
            message: "model unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "model unavailable");
        assert!(err.is_server_error());
    }

    #[test]
    fn test_api_error_is_not_server_error() {
        let err = AdviceError::Api {
            status: 500,
            message: "Internal server error".to_string(),
        };
        assert!(!err.is_server_error());
    }
}
