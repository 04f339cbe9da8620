//! `primality init`: write a default configuration file.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default Primality configuration file.
///
/// Target: `--config FILE` if given, `.primality.toml` with `--local`,
/// otherwise [`AppConfig::config_path`].
pub fn execute(args: InitArgs, global: &GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config_path = target_path(&args, global.config.as_deref());

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        return Err(CliError::ConfigExists { path: config_path });
    }

    let toml = toml::to_string_pretty(&AppConfig::default())
        .with_cli_context(|| "Failed to serialise default config")?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    info!(path = %config_path.display(), "Configuration written");
    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

fn target_path(args: &InitArgs, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None if args.local => PathBuf::from(LOCAL_CONFIG_FILE),
        None => AppConfig::config_path(),
    }
}
