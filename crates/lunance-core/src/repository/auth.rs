// Auth repository.
//
// Besides the usual gateway flow, a successful login or registration
// installs the bearer token on the shared `ApiClient` and persists it;
// logout forgets it locally even when the server call fails.

use std::sync::Arc;

use lunance_api::ApiClient;
use lunance_api::requests::{LoginRequest, RegisterRequest};
use lunance_api::sources::AuthDataSource;
use tracing::{debug, warn};

use super::{Gateway, Operation};
use crate::entity::{AuthSession, UserProfile};
use crate::outcome::Outcome;
use crate::session::{SessionStore, StoredSession};

const LOGIN: Operation = Operation::new("login", "Gagal masuk");
const REGISTER: Operation = Operation::new("register", "Gagal mendaftar");
const LOGOUT: Operation = Operation::new("logout", "Gagal keluar");
const CURRENT_USER: Operation = Operation::new("current_user", "Gagal memuat data pengguna");

pub struct AuthRepository {
    source: Arc<dyn AuthDataSource>,
    gateway: Gateway,
    client: Arc<ApiClient>,
    sessions: Arc<dyn SessionStore>,
}

impl AuthRepository {
    pub fn new(
        source: Arc<dyn AuthDataSource>,
        gateway: Gateway,
        client: Arc<ApiClient>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            source,
            gateway,
            client,
            sessions,
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> Outcome<AuthSession> {
        let outcome = self
            .gateway
            .fetch_one(LOGIN, move || self.source.login(request))
            .await;
        if let Outcome::Success(ref session) = outcome {
            self.remember(session);
        }
        outcome
    }

    pub async fn register(&self, request: &RegisterRequest) -> Outcome<AuthSession> {
        let outcome = self
            .gateway
            .fetch_one(REGISTER, move || self.source.register(request))
            .await;
        if let Outcome::Success(ref session) = outcome {
            self.remember(session);
        }
        outcome
    }

    /// Log out server-side, then drop the local session regardless.
    pub async fn logout(&self) -> Outcome<()> {
        let outcome = self
            .gateway
            .execute(LOGOUT, move || self.source.logout())
            .await;
        self.forget();
        outcome
    }

    pub async fn current_user(&self) -> Outcome<UserProfile> {
        self.gateway
            .fetch_one(CURRENT_USER, move || self.source.current_user())
            .await
    }

    /// Reinstall a persisted token on the client. Returns whether one was found.
    pub fn restore_session(&self) -> bool {
        match self.sessions.load() {
            Ok(Some(stored)) => {
                debug!(user_id = %stored.user_id, "restoring persisted session");
                self.client.set_token(stored.access_token);
                true
            }
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, "could not read persisted session");
                false
            }
        }
    }

    fn remember(&self, session: &AuthSession) {
        self.client.set_token(session.access_token.clone());
        if let Err(err) = self.sessions.save(&StoredSession::from(session)) {
            warn!(error = %err, "could not persist session");
        }
    }

    fn forget(&self) {
        self.client.clear_token();
        if let Err(err) = self.sessions.clear() {
            warn!(error = %err, "could not clear persisted session");
        }
    }
}
