//! CLI error types with miette diagnostics.
//!
//! Failures reported by use cases arrive as plain messages; this module
//! classifies them into exit codes and attaches actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use lunance_api::sources::SESSION_EXPIRED;
use lunance_config::ConfigError;
use lunance_core::{NO_CONNECTION, ValidationError};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Operation outcomes ───────────────────────────────────────────

    #[error("{message}")]
    #[diagnostic(code(lunance::operation_failed))]
    Operation { message: String },

    #[error("{}", NO_CONNECTION)]
    #[diagnostic(
        code(lunance::offline),
        help(
            "Check your network connection and that the API is reachable.\n\
             URL: {url}"
        )
    )]
    Offline { url: String },

    #[error("{}", SESSION_EXPIRED)]
    #[diagnostic(code(lunance::session_expired), help("Run: lunance auth login"))]
    SessionExpired,

    #[error("Not logged in")]
    #[diagnostic(code(lunance::not_logged_in), help("Run: lunance auth login"))]
    NotLoggedIn,

    // ── Input ────────────────────────────────────────────────────────

    #[error("{0}")]
    #[diagnostic(code(lunance::invalid_input))]
    InvalidInput(#[from] ValidationError),

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(lunance::validation))]
    Validation { field: String, reason: String },

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(lunance::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Setup ────────────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(
        code(lunance::config),
        help("Inspect the effective settings with: lunance config show")
    )]
    Config(#[from] ConfigError),

    #[error("Could not set up the HTTP client: {0}")]
    #[diagnostic(
        code(lunance::client),
        help("Check api_url and TLS settings, or pass --insecure for development servers.")
    )]
    Client(#[from] lunance_api::Error),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render JSON: {0}")]
    #[diagnostic(code(lunance::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Classify a use-case failure message.
    pub fn from_failure(message: String, url: &str) -> Self {
        if message == NO_CONNECTION {
            Self::Offline { url: url.to_owned() }
        } else if message == SESSION_EXPIRED {
            Self::SessionExpired
        } else {
            Self::Operation { message }
        }
    }

    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Offline { .. } => exit_code::CONNECTION,
            Self::SessionExpired | Self::NotLoggedIn => exit_code::AUTH,
            Self::InvalidInput(_)
            | Self::Validation { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}
