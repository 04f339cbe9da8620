//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PRIMALITY_<SECTION>__<KEY>`, e.g.
//!    `PRIMALITY_CHECK__SHOW_WITNESS=true`
//! 3. Config file: `--config FILE`, else `./.primality.toml` layered over
//!    [`AppConfig::config_path`]
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat, FileSourceFile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::global::OutputFormat;

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "PRIMALITY";

/// File name used by `init --local`.
pub const LOCAL_CONFIG_FILE: &str = ".primality.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Defaults for `primality check`.
    pub check: CheckConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Behave as if `--witness` were always passed.
    pub show_witness: bool,
}

impl AppConfig {
    /// Load configuration: defaults, then config files, then environment.
    ///
    /// `config_file` is the path passed via `--config` and is the only file
    /// read when given.  Otherwise [`Self::config_path`] is read, then
    /// `.primality.toml` in the current directory on top of it; both are
    /// optional.  When `require_file` is set, an explicit `--config` path
    /// that does not exist is an error.
    ///
    /// Files are parsed as TOML regardless of their extension, matching
    /// what `init` writes.
    pub fn load(config_file: Option<&Path>, require_file: bool) -> anyhow::Result<Self> {
        let mut builder = Config::builder();
        match config_file {
            Some(path) => {
                debug!(path = %path.display(), required = require_file, "Loading configuration");
                builder = builder.add_source(toml_file(path).required(require_file));
            }
            None => {
                for path in Self::search_paths() {
                    debug!(path = %path.display(), "Looking for configuration");
                    builder = builder.add_source(toml_file(&path).required(false));
                }
            }
        }

        // Missing keys fall back to `Default` through `#[serde(default)]`.
        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| {
                format!(
                    "Failed to read configuration from '{}'",
                    Self::active_path(config_file).display()
                )
            })?
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.primality.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("rs", "primality", "primality")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file this invocation is governed by: `--config` if given, else
    /// `.primality.toml` when present in the current directory, else the
    /// default path.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        match config_file {
            Some(path) => path.to_path_buf(),
            None if Path::new(LOCAL_CONFIG_FILE).is_file() => PathBuf::from(LOCAL_CONFIG_FILE),
            None => Self::config_path(),
        }
    }

    /// Files read when no `--config` is given, lowest priority first.
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![Self::config_path()];
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if !paths.contains(&local) {
            paths.push(local);
        }
        paths
    }
}

fn toml_file(path: &Path) -> File<FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write as _;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, OutputFormat::Auto);
        assert!(!cfg.check.show_witness);
    }

    #[test]
    fn load_reads_file_over_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[check]\nshow_witness = true\n\n[output]\nformat = \"json\"").unwrap();

        let cfg = AppConfig::load(Some(file.path()), true).unwrap();
        assert!(cfg.check.show_witness);
        assert_eq!(cfg.output.format, OutputFormat::Json);
        // untouched keys keep their defaults
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_explicit_file_is_an_error_when_required() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path), true).is_err());
        assert!(AppConfig::load(Some(&path), false).is_ok());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output]\nformat = \"sparkly\"").unwrap();
        assert!(AppConfig::load(Some(file.path()), true).is_err());
    }

    #[test]
    fn any_extension_is_read_as_toml() {
        let mut file = tempfile::Builder::new().suffix(".conf").tempfile().unwrap();
        writeln!(file, "[check]\nshow_witness = true").unwrap();

        let cfg = AppConfig::load(Some(file.path()), true).unwrap();
        assert!(cfg.check.show_witness);
    }

    #[test]
    fn local_file_is_searched_after_default() {
        let paths = AppConfig::search_paths();
        assert_eq!(paths.last(), Some(&PathBuf::from(LOCAL_CONFIG_FILE)));
        assert_eq!(paths.first(), Some(&AppConfig::config_path()));
    }

    #[test]
    fn serialises_to_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[output]"));
        assert!(text.contains("show_witness = false"));
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
        assert_eq!(
            AppConfig::active_path(Some(Path::new("x.toml"))),
            PathBuf::from("x.toml")
        );
    }
}
