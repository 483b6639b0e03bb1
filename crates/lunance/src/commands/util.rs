//! Shared helpers for command handlers.

use std::io::IsTerminal;

use secrecy::SecretString;

use lunance_core::{Outcome, Services};

use crate::error::CliError;

/// Turn a use-case outcome into the value or a classified CLI error.
pub fn settle<T>(outcome: Outcome<T>, services: &Services) -> Result<T, CliError> {
    outcome
        .into_result()
        .map_err(|message| CliError::from_failure(message, services.client.base_url().as_str()))
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: message.to_owned(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(prompt_err)?;
    Ok(confirmed)
}

/// Ask for a line of text.
pub fn prompt_text(label: &str) -> Result<String, CliError> {
    dialoguer::Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_err)
}

/// Ask for a secret without echoing it.
pub fn prompt_secret(label: &str) -> Result<SecretString, CliError> {
    let value = rpassword::prompt_password(format!("{label}: ")).map_err(prompt_err)?;
    Ok(SecretString::from(value))
}

/// Use `given` if present, else prompt.
pub fn secret_or_prompt(given: Option<String>, label: &str) -> Result<SecretString, CliError> {
    match given {
        Some(value) => Ok(SecretString::from(value)),
        None => prompt_secret(label),
    }
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}
