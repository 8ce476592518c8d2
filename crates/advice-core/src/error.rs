//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Why a single advice fetch failed.
///
/// All kinds are handled the same way (logged and swallowed); the split only
/// improves diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailureKind {
    /// Connection refused, DNS failure, TLS error, timeout, ...
    Network,
    /// Any status other than 200, redirects included
    Status(u16),
    /// 200 response whose body is not `{ "slip": { "id", "advice" } }`
    Body,
}

impl std::fmt::Display for FetchFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchFailureKind::Network => write!(f, "network"),
            FetchFailureKind::Status(code) => write!(f, "status {}", code),
            FetchFailureKind::Body => write!(f, "body"),
        }
    }
}

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Advice API Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Advice fetch failed ({kind}): {message}")]
    Fetch {
        kind: FetchFailureKind,
        message: String,
    },

    #[error("Invalid advice endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Fetch {
            kind: FetchFailureKind::Network,
            message: message.into(),
        }
    }

    pub fn bad_status(code: u16) -> Self {
        Self::Fetch {
            kind: FetchFailureKind::Status(code),
            message: format!("expected HTTP 200, got {}", code),
        }
    }

    pub fn bad_body(message: impl Into<String>) -> Self {
        Self::Fetch {
            kind: FetchFailureKind::Body,
            message: message.into(),
        }
    }

    pub fn invalid_endpoint(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The failure kind, if this is an advice fetch failure
    pub fn fetch_kind(&self) -> Option<FetchFailureKind> {
        match self {
            Error::Fetch { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Terminal { .. } | Error::InvalidEndpoint { .. } | Error::HttpClient(_)
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::bad_status(503);
        assert_eq!(
            err.to_string(),
            "Advice fetch failed (status 503): expected HTTP 200, got 503"
        );

        let err = Error::network("connection refused");
        assert!(err.to_string().contains("(network)"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_fetch_kind() {
        assert_eq!(
            Error::network("x").fetch_kind(),
            Some(FetchFailureKind::Network)
        );
        assert_eq!(
            Error::bad_status(301).fetch_kind(),
            Some(FetchFailureKind::Status(301))
        );
        assert_eq!(Error::bad_body("x").fetch_kind(), Some(FetchFailureKind::Body));
        assert_eq!(Error::config("x").fetch_kind(), None);
    }

    #[test]
    fn test_fetch_errors_are_not_fatal() {
        for err in [
            Error::network("down"),
            Error::bad_status(500),
            Error::bad_body("missing slip"),
        ] {
            assert!(!err.is_fatal());
        }
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::terminal("no tty").is_fatal());
        assert!(Error::invalid_endpoint("ftp://x", "unsupported scheme").is_fatal());
        assert!(!Error::config("bad toml").is_fatal());
    }

    #[test]
    fn test_invalid_endpoint_message() {
        let err = Error::invalid_endpoint("not a url", "relative URL without a base");
        assert!(err.to_string().contains("not a url"));
        assert!(err.to_string().contains("relative URL"));
    }
}
