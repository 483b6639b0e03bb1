// ── Account domain types: profile, preferences, session ──

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub university: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preferences {
    /// ISO 4217 code.
    pub currency: String,
    pub language: String,
    /// `light`, `dark` or `system`.
    pub theme: String,
    pub notifications_enabled: bool,
    pub monthly_budget: Option<f64>,
}

/// An authenticated session. The token never appears in `Debug` output.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: SecretString,
    pub token_type: String,
    pub user: UserProfile,
}

impl PartialEq for AuthSession {
    fn eq(&self, other: &Self) -> bool {
        self.access_token.expose_secret() == other.access_token.expose_secret()
            && self.token_type == other.token_type
            && self.user == other.user
    }
}
