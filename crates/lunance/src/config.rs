//! Effective configuration: config file and env, overridden by CLI flags,
//! and construction of the data-access services from it.

use std::sync::Arc;

use clap::ValueEnum;
use tracing::debug;

use lunance_api::ApiClient;
pub use lunance_config::{Config, config_path, load_config, save_config};
use lunance_config::FileSessionStore;
use lunance_core::{Reachability, Services, StaticReachability, TcpProbe};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output::{self, Render};

/// Apply flag overrides on top of the loaded config.
pub fn effective_config(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = load_config()?;
    if let Some(ref url) = global.api_url {
        cfg.api_url.clone_from(url);
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout_secs = timeout;
    }
    if global.insecure {
        cfg.insecure = true;
    }
    Ok(cfg)
}

/// Output options: `--output` flag, else the config's `output`, else table.
pub fn render_options(global: &GlobalOpts, cfg: &Config) -> Render {
    let format = global.output.unwrap_or_else(|| {
        OutputFormat::from_str(&cfg.output, true).unwrap_or(OutputFormat::Table)
    });
    Render {
        format,
        color: output::should_color(global.color),
        quiet: global.quiet,
    }
}

/// Build the shared client, connectivity gate and repositories, and
/// reinstall any persisted login.
pub fn build_services(global: &GlobalOpts, cfg: &Config) -> Result<Services, CliError> {
    let (url, transport) = cfg.to_transport_config()?;
    let client = Arc::new(ApiClient::new(url.as_str(), &transport)?);

    let reachability: Arc<dyn Reachability> = if global.offline {
        Arc::new(StaticReachability::offline())
    } else {
        match TcpProbe::for_url(&url, cfg.reachability_timeout()) {
            Some(probe) => Arc::new(probe),
            None => Arc::new(StaticReachability::online()),
        }
    };

    let services = Services::new(
        client,
        reachability,
        Arc::new(FileSessionStore::default_location()),
    );
    if services.auth.restore_session() {
        debug!("using stored session");
    }
    Ok(services)
}
