// Profile and preferences remote data source.

use std::sync::Arc;

use async_trait::async_trait;

use super::{SourceError, decode_object, expect_ack};
use crate::client::ApiClient;
use crate::models::{PreferencesModel, UserProfileModel};
use crate::requests::{ChangePasswordRequest, UpdatePreferencesRequest, UpdateProfileRequest};

#[async_trait]
pub trait SettingsDataSource: Send + Sync {
    /// `GET /users/me`
    async fn get_profile(&self) -> Result<UserProfileModel, SourceError>;

    /// `PUT /users/me`
    async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<UserProfileModel, SourceError>;

    /// `PUT /users/me/password`
    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), SourceError>;

    /// `GET /settings`
    async fn get_preferences(&self) -> Result<PreferencesModel, SourceError>;

    /// `PUT /settings`
    async fn update_preferences(
        &self,
        request: &UpdatePreferencesRequest,
    ) -> Result<PreferencesModel, SourceError>;
}

pub struct HttpSettingsDataSource {
    client: Arc<ApiClient>,
}

impl HttpSettingsDataSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SettingsDataSource for HttpSettingsDataSource {
    async fn get_profile(&self) -> Result<UserProfileModel, SourceError> {
        let body = self.client.get(&["users", "me"], &[]).await?;
        decode_object("/users/me", &body)
    }

    async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<UserProfileModel, SourceError> {
        let body = self.client.put(&["users", "me"], request).await?;
        decode_object("/users/me", &body)
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), SourceError> {
        let body = self.client.put(&["users", "me", "password"], request).await?;
        expect_ack("/users/me/password", &body)
    }

    async fn get_preferences(&self) -> Result<PreferencesModel, SourceError> {
        let body = self.client.get(&["settings"], &[]).await?;
        decode_object("/settings", &body)
    }

    async fn update_preferences(
        &self,
        request: &UpdatePreferencesRequest,
    ) -> Result<PreferencesModel, SourceError> {
        let body = self.client.put(&["settings"], request).await?;
        decode_object("/settings", &body)
    }
}
