//! `primality config`: read configuration values.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: &AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = toml::to_string_pretty(config)
                .with_cli_context(|| "Failed to serialise config")?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            output.print(
                &AppConfig::active_path(global.config.as_deref())
                    .display()
                    .to_string(),
            )?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(format!("{:?}", config.output.format).to_lowercase()),
        "check.show_witness" => Ok(config.check.show_witness.to_string()),
        _ => Err(CliError::InvalidInput {
            message: format!(
                "Unknown config key '{key}' (known: output.no_color, output.format, check.show_witness)"
            ),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
