// ── Core error types ──
//
// Repository failures never surface as errors; they are folded into
// `Outcome::Failure`. What remains here are the failures that happen
// before or beside a network call: client-side input validation and the
// persisted session store.

use thiserror::Error;

/// Client-side input check failed; no request was sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email tidak boleh kosong")]
    EmptyEmail,

    #[error("Format email tidak valid")]
    InvalidEmail,

    #[error("Kata sandi tidak boleh kosong")]
    EmptyPassword,

    #[error("Nama tidak boleh kosong")]
    EmptyName,
}

/// Reading or writing the persisted session failed.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session store is corrupt: {message}")]
    Corrupt { message: String },
}
