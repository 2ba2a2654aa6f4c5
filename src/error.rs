use std::fmt;

/// Error type for backup-and-recovery operations
#[derive(Debug)]
pub enum BrError {
    /// HTTP request failed outside a named list operation (e.g. IAM exchange)
    Http(reqwest::Error),
    /// Transport failure while calling a named operation
    Transport {
        operation: &'static str,
        source: reqwest::Error,
    },
    /// API returned a non-success status for a named operation
    Api {
        operation: &'static str,
        status: u16,
        body: String,
    },
    /// Response body could not be decoded into the typed model
    Decode {
        operation: &'static str,
        message: String,
    },
    /// A typed record could not be projected into the published shape
    Projection(String),
    /// Token not found in any source
    TokenNotFound(String),
    /// Endpoint not found in any source
    EndpointNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// IAM token exchange failed
    Auth(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error (including data source arguments)
    Config(String),
    /// The read was cancelled before it completed
    Interrupted,
}

impl fmt::Display for BrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrError::Http(e) => write!(f, "HTTP request failed: {}", e),
            BrError::Transport { operation, source } => {
                write!(f, "{} failed: {}", operation, source)
            }
            BrError::Api {
                operation,
                status,
                body,
            } => write!(f, "{} failed (status {}): {}", operation, status, body),
            BrError::Decode { operation, message } => {
                write!(f, "{} failed: could not decode response: {}", operation, message)
            }
            BrError::Projection(msg) => write!(f, "Projection error: {}", msg),
            BrError::TokenNotFound(msg) => write!(f, "{}", msg),
            BrError::EndpointNotFound(msg) => write!(f, "{}", msg),
            BrError::Credentials(msg) => write!(f, "{}", msg),
            BrError::Auth(msg) => write!(f, "Authentication failed: {}", msg),
            BrError::Json(msg) => write!(f, "JSON error: {}", msg),
            BrError::Config(msg) => write!(f, "Configuration error: {}", msg),
            BrError::Interrupted => write!(f, "Interrupted"),
        }
    }
}

impl std::error::Error for BrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BrError::Http(e) => Some(e),
            BrError::Transport { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BrError {
    fn from(err: reqwest::Error) -> Self {
        BrError::Http(err)
    }
}

impl From<serde_json::Error> for BrError {
    fn from(err: serde_json::Error) -> Self {
        BrError::Json(err.to_string())
    }
}

impl From<std::io::Error> for BrError {
    fn from(err: std::io::Error) -> Self {
        BrError::Credentials(err.to_string())
    }
}

/// Result type alias for backup-and-recovery operations
pub type Result<T> = std::result::Result<T, BrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_names_operation() {
        let err = BrError::Api {
            operation: "GetProtectionPolicies",
            status: 500,
            body: "internal".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("GetProtectionPolicies"));
        assert!(msg.contains("500"));
        assert!(msg.contains("internal"));
    }

    #[test]
    fn test_decode_error_names_operation() {
        let err = BrError::Decode {
            operation: "GetRecoveries",
            message: "missing field `name`".to_string(),
        };
        assert!(err.to_string().starts_with("GetRecoveries failed"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BrError>();
    }

    #[test]
    fn test_config_error_display() {
        let err = BrError::Config("unknown argument 'foo'".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("foo"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: BrError = json_err.into();
        match err {
            BrError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected BrError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BrError = io_err.into();
        match err {
            BrError::Credentials(msg) => assert!(msg.contains("file not found")),
            _ => panic!("Expected BrError::Credentials"),
        }
    }

    #[test]
    fn test_error_source_none_for_messages() {
        use std::error::Error;
        let err = BrError::Projection("not an object".to_string());
        assert!(err.source().is_none());
    }
}
