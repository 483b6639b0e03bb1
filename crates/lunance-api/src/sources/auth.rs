// Auth remote data source.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{SourceError, decode_object, expect_ack};
use crate::client::ApiClient;
use crate::models::{AuthResponseModel, UserProfileModel};
use crate::requests::{LoginRequest, RegisterRequest};

#[async_trait]
pub trait AuthDataSource: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponseModel, SourceError>;

    /// `POST /auth/register`
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponseModel, SourceError>;

    /// `POST /auth/logout`
    async fn logout(&self) -> Result<(), SourceError>;

    /// `GET /auth/me`
    async fn current_user(&self) -> Result<UserProfileModel, SourceError>;
}

pub struct HttpAuthDataSource {
    client: Arc<ApiClient>,
}

impl HttpAuthDataSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthDataSource for HttpAuthDataSource {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponseModel, SourceError> {
        debug!(email = %request.email, "logging in");
        let body = self.client.post(&["auth", "login"], request).await?;
        decode_object("/auth/login", &body)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponseModel, SourceError> {
        debug!(email = %request.email, "registering");
        let body = self.client.post(&["auth", "register"], request).await?;
        decode_object("/auth/register", &body)
    }

    async fn logout(&self) -> Result<(), SourceError> {
        let body = self
            .client
            .post(&["auth", "logout"], &serde_json::Map::new())
            .await?;
        expect_ack("/auth/logout", &body)
    }

    async fn current_user(&self) -> Result<UserProfileModel, SourceError> {
        let body = self.client.get(&["auth", "me"], &[]).await?;
        decode_object("/auth/me", &body)
    }
}
