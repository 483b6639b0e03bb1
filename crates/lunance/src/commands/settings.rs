//! Profile and preference command handlers.

use lunance_api::requests::{ChangePasswordRequest, UpdatePreferencesRequest, UpdateProfileRequest};
use lunance_core::entity::{Preferences, UserProfile};
use lunance_core::{Services, UseCase};

use crate::cli::{SettingsArgs, SettingsCommand};
use crate::error::CliError;
use crate::output::{self, Render};

use super::util;

fn profile_detail(user: &UserProfile, color: bool) -> String {
    output::detail(
        &[
            ("ID", user.id.clone()),
            ("Name", user.name.clone()),
            ("Email", user.email.clone()),
            ("University", user.university.clone().unwrap_or_default()),
        ],
        color,
    )
}

fn preferences_detail(prefs: &Preferences, color: bool) -> String {
    output::detail(
        &[
            ("Currency", prefs.currency.clone()),
            ("Language", prefs.language.clone()),
            ("Theme", prefs.theme.clone()),
            ("Notifications", prefs.notifications_enabled.to_string()),
            (
                "Monthly budget",
                prefs
                    .monthly_budget
                    .map_or_else(|| "-".into(), output::format_amount),
            ),
        ],
        color,
    )
}

fn print_profile(render: &Render, user: &UserProfile) -> Result<(), CliError> {
    let out = output::render_single(render, user, |u| profile_detail(u, render.color))?;
    output::print_output(&out, render.quiet);
    Ok(())
}

fn print_preferences(render: &Render, prefs: &Preferences) -> Result<(), CliError> {
    let out = output::render_single(render, prefs, |p| preferences_detail(p, render.color))?;
    output::print_output(&out, render.quiet);
    Ok(())
}

pub async fn handle(
    services: &Services,
    args: SettingsArgs,
    render: &Render,
) -> Result<(), CliError> {
    match args.command {
        SettingsCommand::Profile => {
            let user = util::settle(services.get_profile().call(()).await, services)?;
            print_profile(render, &user)
        }

        SettingsCommand::UpdateProfile {
            name,
            email,
            university,
        } => {
            let request = UpdateProfileRequest {
                name,
                email,
                university,
            };
            if request == UpdateProfileRequest::default() {
                return Err(CliError::Validation {
                    field: "update-profile".into(),
                    reason: "nothing to change".into(),
                });
            }
            let outcome = services.update_profile().call(request).await;
            print_profile(render, &util::settle(outcome, services)?)
        }

        SettingsCommand::Password => {
            let request = ChangePasswordRequest {
                current_password: util::prompt_secret("Current password")?,
                new_password: util::prompt_secret("New password")?,
            };
            util::settle(services.change_password().call(request).await, services)?;
            output::notice(render, "Password changed");
            Ok(())
        }

        SettingsCommand::Show => {
            let prefs = util::settle(services.get_preferences().call(()).await, services)?;
            print_preferences(render, &prefs)
        }

        SettingsCommand::Set {
            currency,
            language,
            theme,
            notifications,
            monthly_budget,
        } => {
            let request = UpdatePreferencesRequest {
                currency,
                language,
                theme,
                notifications_enabled: notifications,
                monthly_budget,
            };
            let outcome = services.update_preferences().call(request).await;
            print_preferences(render, &util::settle(outcome, services)?)
        }
    }
}
