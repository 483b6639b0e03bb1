// Settings use cases.

use lunance_api::requests::{ChangePasswordRequest, UpdatePreferencesRequest, UpdateProfileRequest};

use super::use_case;
use crate::entity::{Preferences, UserProfile};
use crate::outcome::Outcome;
use crate::repository::SettingsRepository;

use_case! {
    GetProfileUseCase(SettingsRepository) {
        params: (),
        output: Outcome<UserProfile>,
        |repo, _| repo.get_profile().await
    }
}

use_case! {
    UpdateProfileUseCase(SettingsRepository) {
        params: UpdateProfileRequest,
        output: Outcome<UserProfile>,
        |repo, request| repo.update_profile(&request).await
    }
}

use_case! {
    ChangePasswordUseCase(SettingsRepository) {
        params: ChangePasswordRequest,
        output: Outcome<()>,
        |repo, request| repo.change_password(&request).await
    }
}

use_case! {
    GetPreferencesUseCase(SettingsRepository) {
        params: (),
        output: Outcome<Preferences>,
        |repo, _| repo.get_preferences().await
    }
}

use_case! {
    UpdatePreferencesUseCase(SettingsRepository) {
        params: UpdatePreferencesRequest,
        output: Outcome<Preferences>,
        |repo, request| repo.update_preferences(&request).await
    }
}
