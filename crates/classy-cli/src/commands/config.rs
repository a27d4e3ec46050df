//! `classy-start config`: inspect configuration values.

use std::collections::BTreeMap;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            if output.is_json() {
                output.json(&BTreeMap::from([(key, value)]))?;
            } else {
                output.print(&format!("{key} = {value}"))?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised =
                    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            let path = global.config.clone().unwrap_or_else(AppConfig::config_path);
            if output.is_json() {
                output.json(&path)?;
            } else {
                output.print(&path.display().to_string())?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Unset optional keys print as an empty string.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    if !AppConfig::keys().contains(&key) {
        return Err(CliError::ConfigError {
            message: format!(
                "Unknown config key: '{key}' (known keys: {})",
                AppConfig::keys().join(", ")
            ),
            source: None,
        });
    }
    Ok(config.get(key).unwrap_or_default())
}

// ── tests ─────────────────────────────────────────────────────────────────────
