// ── Persisted session ──
//
// The auth repository hands successful logins to a `SessionStore` so the
// token survives restarts. Storage lives outside this crate (see
// `lunance-config`); an in-memory store ships here for tests and
// short-lived processes.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entity::AuthSession;
use crate::error::SessionError;

/// What gets written to disk after a login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    #[serde(serialize_with = "expose", deserialize_with = "conceal")]
    pub access_token: SecretString,
    pub token_type: String,
    pub user_id: String,
    pub email: String,
    pub saved_at: DateTime<Utc>,
}

impl From<&AuthSession> for StoredSession {
    fn from(session: &AuthSession) -> Self {
        Self {
            access_token: session.access_token.clone(),
            token_type: session.token_type.clone(),
            user_id: session.user.id.clone(),
            email: session.user.email.clone(),
            saved_at: Utc::now(),
        }
    }
}

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

fn conceal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SecretString, D::Error> {
    String::deserialize(deserializer).map(SecretString::from)
}

/// Persistence for the current session token.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<StoredSession>, SessionError>;

    fn save(&self, session: &StoredSession) -> Result<(), SessionError>;

    fn clear(&self) -> Result<(), SessionError>;
}

/// Process-local session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<StoredSession>, SessionError> {
        Ok(self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn save(&self, session: &StoredSession) -> Result<(), SessionError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn stored() -> StoredSession {
        StoredSession {
            access_token: SecretString::from("jwt".to_owned()),
            token_type: "bearer".into(),
            user_id: "u1".into(),
            email: "sari@kampus.ac.id".into(),
            saved_at: Utc::now(),
        }
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert!(store.load().unwrap().is_none());
        store.save(&stored()).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.access_token.expose_secret(), "jwt");
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn stored_session_serializes_token() {
        let json = serde_json::to_value(stored()).unwrap();
        assert_eq!(json["access_token"], "jwt");
        assert_eq!(json["user_id"], "u1");
    }
}
