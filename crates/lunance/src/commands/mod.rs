//! Command dispatch: bridges CLI args -> use cases -> output formatting.

pub mod auth;
pub mod categories;
pub mod config_cmd;
pub mod dashboard;
pub mod history;
pub mod settings;
pub mod util;

use lunance_core::Services;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;
use crate::output::Render;

/// Dispatch an API-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    services: &Services,
    global: &GlobalOpts,
    render: &Render,
) -> Result<(), CliError> {
    match cmd {
        Command::Auth(args) => auth::handle(services, args, render).await,
        Command::Categories(args) => categories::handle(services, args, global, render).await,
        Command::Dashboard(args) => dashboard::handle(services, args, render).await,
        Command::History(args) => history::handle(services, args, global, render).await,
        Command::Settings(args) => settings::handle(services, args, render).await,
        Command::Config(args) => config_cmd::handle(args, global),
    }
}
