//! Config subcommand handlers.

use lunance_config::ConfigError;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

/// Render the effective config: TOML for table mode, JSON otherwise.
fn format_config(cfg: &Config, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(toml::to_string_pretty(cfg).map_err(ConfigError::from)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(cfg)?),
        OutputFormat::JsonCompact => Ok(serde_json::to_string(cfg)?),
    }
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::effective_config(global)?;
            let render = config::render_options(global, &cfg);
            let out = format_config(&cfg, render.format)?;
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::SetUrl { url } => {
            // A broken stored URL must not block replacing it.
            let mut cfg = config::load_config().unwrap_or_default();
            cfg.api_url = url;
            cfg.api_url()?;
            config::save_config(&cfg)?;

            let render = config::render_options(global, &cfg);
            output::notice(&render, &format!("api_url set to {}", cfg.api_url));
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn table_mode_prints_toml() {
        let out = format_config(&Config::default(), OutputFormat::Table).unwrap();
        assert!(out.contains("api_url = \"http://localhost:8000/api/v1\""));
        assert!(out.contains("timeout_secs = 30"));
    }

    #[test]
    fn json_mode_prints_json() {
        let out = format_config(&Config::default(), OutputFormat::JsonCompact).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["output"], "table");
    }
}
