use thiserror::Error;

/// Top-level error type for the `lunance-api` transport.
///
/// Covers every failure mode of a single HTTP round trip. Remote data
/// sources fold these into [`SourceError`](crate::SourceError) before
/// anything above the API crate sees them.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Server ──────────────────────────────────────────────────────
    /// Bearer token missing, expired, or rejected.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Non-success status with the server's own message when it sent one.
    #[error("{message}")]
    Server { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error came back from the server rather than
    /// from the network path.
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. } | Self::Unauthorized { .. })
    }

    /// Returns `true` if the request never got a usable response.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout { .. } => true,
            _ => false,
        }
    }

    /// HTTP status code, when the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_display_the_upstream_message() {
        let err = Error::Server {
            status: 422,
            message: "Nama kategori sudah dipakai".into(),
        };
        assert_eq!(err.to_string(), "Nama kategori sudah dipakai");
        assert!(err.is_server());
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn timeouts_are_transient() {
        let err = Error::Timeout { timeout_secs: 30 };
        assert!(err.is_transient());
        assert!(!err.is_server());
        assert_eq!(err.status(), None);
    }
}
