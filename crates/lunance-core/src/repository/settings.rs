// Settings repository: profile, password and app preferences.

use std::sync::Arc;

use lunance_api::requests::{ChangePasswordRequest, UpdatePreferencesRequest, UpdateProfileRequest};
use lunance_api::sources::SettingsDataSource;

use super::{Gateway, Operation};
use crate::entity::{Preferences, UserProfile};
use crate::outcome::Outcome;

const GET_PROFILE: Operation = Operation::new("get_profile", "Gagal memuat profil");
const UPDATE_PROFILE: Operation = Operation::new("update_profile", "Gagal memperbarui profil");
const CHANGE_PASSWORD: Operation = Operation::new("change_password", "Gagal mengubah kata sandi");
const GET_PREFERENCES: Operation = Operation::new("get_preferences", "Gagal memuat pengaturan");
const UPDATE_PREFERENCES: Operation =
    Operation::new("update_preferences", "Gagal memperbarui pengaturan");

pub struct SettingsRepository {
    source: Arc<dyn SettingsDataSource>,
    gateway: Gateway,
}

impl SettingsRepository {
    pub fn new(source: Arc<dyn SettingsDataSource>, gateway: Gateway) -> Self {
        Self { source, gateway }
    }

    pub async fn get_profile(&self) -> Outcome<UserProfile> {
        self.gateway
            .fetch_one(GET_PROFILE, move || self.source.get_profile())
            .await
    }

    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Outcome<UserProfile> {
        self.gateway
            .fetch_one(UPDATE_PROFILE, move || self.source.update_profile(request))
            .await
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Outcome<()> {
        self.gateway
            .execute(CHANGE_PASSWORD, move || self.source.change_password(request))
            .await
    }

    pub async fn get_preferences(&self) -> Outcome<Preferences> {
        self.gateway
            .fetch_one(GET_PREFERENCES, move || self.source.get_preferences())
            .await
    }

    pub async fn update_preferences(
        &self,
        request: &UpdatePreferencesRequest,
    ) -> Outcome<Preferences> {
        self.gateway
            .fetch_one(UPDATE_PREFERENCES, move || self.source.update_preferences(request))
            .await
    }
}
