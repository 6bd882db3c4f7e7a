//! Error types for the console core
//!
//! One taxonomy for the whole crate: transport failures, authentication
//! rejections, and the permission-screen error states the UI renders.

use thiserror::Error;

/// Result type alias for the console core
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Main error type for the console core
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Login credentials rejected by the API
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Malformed or unparseable session token
    #[error("Token decode error: {0}")]
    TokenDecode(String),

    /// Failure while loading a role's permissions
    #[error("Failed to load permissions: {0}")]
    PermissionFetch(String),

    /// Failure while persisting an updated permission set
    #[error("Failed to update permissions: {0}")]
    PermissionUpdate(String),

    /// Failure while re-fetching the current user's profile
    #[error("Profile refresh failed: {0}")]
    ProfileRefresh(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Unauthorized errors (401 from the API)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Forbidden errors (403 from the API)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// API-side errors with no more specific mapping
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Message extracted from the error payload, or the status reason
        message: String,
    },

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConsoleError {
    /// Create an authentication error
    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::Auth(message.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error means the server no longer accepts our credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Whether this error is a transient transport failure worth retrying
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpClient(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_constructors() {
        assert!(matches!(ConsoleError::auth("bad"), ConsoleError::Auth(_)));
        assert!(matches!(
            ConsoleError::config("bad"),
            ConsoleError::Config(_)
        ));
        assert!(matches!(
            ConsoleError::validation("bad"),
            ConsoleError::Validation(_)
        ));
    }

    #[test]
    fn test_unauthorized_detection() {
        let err = ConsoleError::Unauthorized("token expired".to_string());
        assert!(err.is_unauthorized());
        assert!(!ConsoleError::auth("nope").is_unauthorized());
    }

    #[test]
    fn test_retryable_classification() {
        let server_side = ConsoleError::Api {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(server_side.is_retryable());

        let client_side = ConsoleError::Api {
            status: 404,
            message: "missing".to_string(),
        };
        assert!(!client_side.is_retryable());
        assert!(!ConsoleError::auth("rejected").is_retryable());
    }

    #[test]
    fn test_display_messages() {
        let err = ConsoleError::PermissionFetch("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to load permissions: connection refused"
        );

        let err = ConsoleError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error (500): boom");
    }
}
