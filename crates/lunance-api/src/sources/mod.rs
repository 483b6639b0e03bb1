// ── Remote data sources ──
//
// One async trait per feature, each backed by an HTTP implementation over
// the shared `ApiClient`. A data source issues exactly one transport call
// per method, checks the response shape, and decodes wire models. It never
// wraps results in an `Outcome`; it raises a typed `SourceError` instead.

pub mod auth;
pub mod category;
pub mod dashboard;
pub mod history;
pub mod settings;

use serde_json::Value;
use thiserror::Error;

use crate::error::Error;
use crate::models::WireModel;

pub use auth::{AuthDataSource, HttpAuthDataSource};
pub use category::{CategoryDataSource, HttpCategoryDataSource};
pub use dashboard::{DashboardDataSource, HttpDashboardDataSource};
pub use history::{HistoryDataSource, HttpHistoryDataSource};
pub use settings::{HttpSettingsDataSource, SettingsDataSource};

/// Message used when the server rejects the bearer token.
pub const SESSION_EXPIRED: &str = "Sesi berakhir, silakan masuk kembali";

/// Expected top-level JSON shape of an endpoint's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    List,
    Object,
}

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Object => "object",
        }
    }
}

// ── Error ───────────────────────────────────────────────────────────

/// Failure raised by a remote data source.
///
/// `Server` and `InvalidResponse` carry messages fit for users as-is;
/// `Transport` and `Decode` describe a cause that repositories prefix with
/// a per-operation phrase.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The server answered with an error; `message` is its own wording.
    #[error("{message}")]
    Server { message: String, status: Option<u16> },

    /// The response had the wrong top-level shape.
    #[error("Format respons tidak valid dari {endpoint}: diharapkan {}", .expected.as_str())]
    InvalidResponse { endpoint: String, expected: Shape },

    /// The request never produced a usable response.
    #[error("{message}")]
    Transport { message: String },

    /// The response had the right shape but a record failed to decode.
    #[error("{message}")]
    Decode { message: String },
}

impl From<Error> for SourceError {
    fn from(err: Error) -> Self {
        match err {
            Error::Unauthorized { .. } => Self::Server {
                message: SESSION_EXPIRED.into(),
                status: Some(401),
            },
            Error::Server { status, message } => Self::Server {
                message,
                status: Some(status),
            },
            Error::Deserialization { message, .. } => Self::Decode { message },
            other => Self::Transport {
                message: other.to_string(),
            },
        }
    }
}

impl SourceError {
    /// Whether the message should reach users unprefixed.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Server { .. } | Self::InvalidResponse { .. })
    }
}

// ── Shape checks and decoding ───────────────────────────────────────

/// Decode a list endpoint's body; anything but a JSON array is rejected.
pub fn decode_list<T: WireModel>(endpoint: &str, body: &Value) -> Result<Vec<T>, SourceError> {
    let Value::Array(items) = body else {
        return Err(invalid(endpoint, Shape::List));
    };
    items.iter().map(|item| decode(endpoint, item)).collect()
}

/// Decode an object endpoint's body; anything but a JSON object is rejected.
pub fn decode_object<T: WireModel>(endpoint: &str, body: &Value) -> Result<T, SourceError> {
    if !body.is_object() {
        return Err(invalid(endpoint, Shape::Object));
    }
    decode(endpoint, body)
}

/// Accept an object or an empty body (delete/logout acknowledgements).
pub fn expect_ack(endpoint: &str, body: &Value) -> Result<(), SourceError> {
    match body {
        Value::Object(_) | Value::Null => Ok(()),
        _ => Err(invalid(endpoint, Shape::Object)),
    }
}

fn decode<T: WireModel>(endpoint: &str, value: &Value) -> Result<T, SourceError> {
    T::from_json(value).map_err(|e| SourceError::Decode {
        message: format!("{endpoint}: {e}"),
    })
}

fn invalid(endpoint: &str, expected: Shape) -> SourceError {
    SourceError::InvalidResponse {
        endpoint: endpoint.to_owned(),
        expected,
    }
}

/// Push `(key, value)` only when the filter is set.
pub(crate) fn push_opt(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<String>) {
    if let Some(value) = value {
        params.push((key, value));
    }
}
