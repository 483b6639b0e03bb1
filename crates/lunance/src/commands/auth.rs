//! Auth command handlers.

use lunance_api::requests::{LoginRequest, RegisterRequest};
use lunance_core::entity::UserProfile;
use lunance_core::{Services, UseCase};

use crate::cli::{AuthArgs, AuthCommand};
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
            ("Joined", user.created_at.format("%Y-%m-%d").to_string()),
        ],
        color,
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(services: &Services, args: AuthArgs, render: &Render) -> Result<(), CliError> {
    match args.command {
        AuthCommand::Login { email, password } => {
            let email = match email {
                Some(email) => email,
                None => util::prompt_text("Email")?,
            };
            let password = util::secret_or_prompt(password, "Password")?;

            let outcome = services.login().call(LoginRequest { email, password }).await?;
            let session = util::settle(outcome, services)?;
            output::notice(render, &format!("Logged in as {}", session.user.name));
            Ok(())
        }

        AuthCommand::Register {
            name,
            email,
            university,
            password,
        } => {
            let password = util::secret_or_prompt(password, "Password")?;
            let request = RegisterRequest {
                name,
                email,
                password,
                university,
            };

            let outcome = services.register().call(request).await?;
            let session = util::settle(outcome, services)?;
            output::notice(render, &format!("Account created for {}", session.user.email));
            Ok(())
        }

        AuthCommand::Logout => {
            util::settle(services.logout().call(()).await, services)?;
            output::notice(render, "Logged out");
            Ok(())
        }

        AuthCommand::Whoami => {
            if !services.client.has_token() {
                return Err(CliError::NotLoggedIn);
            }
            let user = util::settle(services.current_user().call(()).await, services)?;
            let out = output::render_single(render, &user, |u| profile_detail(u, render.color))?;
            output::print_output(&out, render.quiet);
            Ok(())
        }
    }
}
