//! Flags shared by `check`, `init`, `config` and `completions`.
//!
//! Flattened into [`super::Cli`]; every flag is `global = true`, so
//! `primality check 7 -v` and `primality -v check 7` are the same call.

use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging, colour, config-file and output-format switches.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Logging level on stderr.
    ///
    /// `-v` logs one "Candidate checked" event per check, `-vv` adds candidate
    /// parse failures and the loaded configuration, `-vvv` adds each
    /// classification.  Never changes stdout.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (one line per check)
    -vv     - Debug level (parsing and configuration)
    -vvv    - Trace level (classification details)"
    )]
    pub verbose: u8,

    /// Drop the human/plain verdict line; the exit code still carries the
    /// answer under `--fail-on-composite`.  JSON output is kept.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Plain ✓/✗ markers instead of green/red ones.  Also set by
    /// `NO_COLOR` or `output.no_color`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read only this TOML file instead of the default and local ones.
    /// `init` writes here.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// `auto` defers to `output.format` in config, then to TTY detection.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How a verdict is written to stdout.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human on a terminal, Plain when piped.
    #[default]
    Auto,
    /// Coloured ✓/✗ line.
    Human,
    /// Same line without colour.
    Plain,
    /// `{candidate, prime, kind, witness}` object.
    Json,
}
