// Async HTTP client for the Lunance REST API.
//
// Base path: the configured API root (e.g. `https://api.lunance.id/api/v1/`)
// Auth: `Authorization: Bearer <token>` once a session exists

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Keys the backend uses for a human-readable error message, in priority order.
const ERROR_MESSAGE_KEYS: [&str; 3] = ["message", "detail", "error"];

// ── Client ───────────────────────────────────────────────────────────

/// Thin async client for the Lunance REST API.
///
/// Every verb returns the decoded JSON body as a [`Value`] so that remote
/// data sources can check the response *shape* before decoding it into a
/// model. An empty body decodes as [`Value::Null`].
///
/// The instance is shared (behind an `Arc`) by every data source. Its only
/// mutable state is the bearer token, swapped atomically on login/logout.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    timeout_secs: u64,
    token: ArcSwapOption<SecretString>,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from the API root URL and a transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http, transport.timeout.as_secs())
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client, timeout_secs: u64) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            timeout_secs,
            token: ArcSwapOption::empty(),
        })
    }

    /// Parse the root URL and make sure it can carry path segments.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let url = Url::parse(raw)?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        Ok(url)
    }

    /// The API root every path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Session token ────────────────────────────────────────────────

    /// Install the bearer token sent with every subsequent request.
    pub fn set_token(&self, token: SecretString) {
        debug!("installing bearer token");
        self.token.store(Some(Arc::new(token)));
    }

    /// Forget the bearer token.
    pub fn clear_token(&self) {
        debug!("clearing bearer token");
        self.token.store(None);
    }

    /// Whether a bearer token is currently installed.
    pub fn has_token(&self) -> bool {
        self.token.load().is_some()
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append path segments (percent-encoded) onto the API root.
    pub fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub async fn get(&self, segments: &[&str], params: &[(&str, String)]) -> Result<Value, Error> {
        let url = self.url(segments)?;
        debug!("GET {url} params={params:?}");

        let builder = self.http.get(url).query(params);
        self.send(builder).await
    }

    pub async fn post<B: Serialize + Sync + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Value, Error> {
        let url = self.url(segments)?;
        debug!("POST {url}");

        let builder = self.http.post(url).json(body);
        self.send(builder).await
    }

    pub async fn put<B: Serialize + Sync + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Value, Error> {
        let url = self.url(segments)?;
        debug!("PUT {url}");

        let builder = self.http.put(url).json(body);
        self.send(builder).await
    }

    pub async fn delete(&self, segments: &[&str]) -> Result<Value, Error> {
        let url = self.url(segments)?;
        debug!("DELETE {url}");

        let builder = self.http.delete(url);
        self.send(builder).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<Value, Error> {
        let builder = match self.token.load_full() {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        };

        let resp = builder.send().await.map_err(|e| self.map_transport(e))?;
        self.handle_response(resp).await
    }

    fn map_transport(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            Error::Transport(err)
        }
    }

    async fn handle_response(&self, resp: reqwest::Response) -> Result<Value, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.map_transport(e))?;

        if !status.is_success() {
            return Err(parse_error(status, &body));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }
}

/// Build an error from a non-success response, preferring the server's message.
fn parse_error(status: StatusCode, raw: &str) -> Error {
    let from_json = serde_json::from_str::<Value>(raw).ok().and_then(|json| {
        ERROR_MESSAGE_KEYS
            .iter()
            .find_map(|key| json.get(key).and_then(Value::as_str).map(str::to_owned))
    });

    let message = from_json.unwrap_or_else(|| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            status.to_string()
        } else {
            trimmed.chars().take(200).collect()
        }
    });

    if status == StatusCode::UNAUTHORIZED {
        Error::Unauthorized { message }
    } else {
        Error::Server {
            status: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::from_reqwest(base, reqwest::Client::new(), 30).unwrap()
    }

    #[test]
    fn url_appends_segments_to_root() {
        let api = client("https://api.lunance.id/api/v1");
        let url = api.url(&["categories", "search"]).unwrap();
        assert_eq!(url.as_str(), "https://api.lunance.id/api/v1/categories/search");
    }

    #[test]
    fn url_tolerates_trailing_slash_and_encodes_ids() {
        let api = client("https://api.lunance.id/api/v1/");
        let url = api.url(&["categories", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "https://api.lunance.id/api/v1/categories/a%20b%2Fc");
    }

    #[test]
    fn rejects_non_base_urls() {
        let err = ApiClient::from_reqwest("mailto:ops@lunance.id", reqwest::Client::new(), 30);
        assert!(matches!(err, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn error_message_prefers_json_keys() {
        let err = parse_error(StatusCode::BAD_REQUEST, r#"{"detail":"Kategori tidak ditemukan"}"#);
        assert!(matches!(
            err,
            Error::Server { status: 400, ref message } if message == "Kategori tidak ditemukan"
        ));
    }

    #[test]
    fn error_message_falls_back_to_status_text() {
        let err = parse_error(StatusCode::BAD_GATEWAY, "");
        assert_eq!(err.to_string(), "502 Bad Gateway");
    }

    #[test]
    fn unauthorized_is_its_own_variant() {
        let err = parse_error(StatusCode::UNAUTHORIZED, r#"{"message":"Token expired"}"#);
        assert!(matches!(err, Error::Unauthorized { ref message } if message == "Token expired"));
    }

    #[test]
    fn token_can_be_swapped() {
        let api = client("http://localhost:8000/api/v1");
        assert!(!api.has_token());
        api.set_token(SecretString::from("abc".to_owned()));
        assert!(api.has_token());
        api.clear_token();
        assert!(!api.has_token());
    }
}
