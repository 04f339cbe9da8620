//! # Primality CLI
//!
//! Command-line example for `primality-core`: checks one candidate per run.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + file + env).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                         |
//! |------|-------------------------------------------------|
//! |  0   | Success                                         |
//! |  1   | Internal error, or not prime with `--fail-on-composite` |
//! |  2   | User / input error                              |
//! |  4   | Configuration error                             |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument, warn};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too and exit 0.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    // `init` may be pointed at a file that does not exist yet, or that it is
    // about to replace with `--force`.
    let is_init = matches!(cli.command, Commands::Init(_));
    let config = match AppConfig::load(cli.global.config.as_deref(), !is_init) {
        Ok(cfg) => cfg,
        Err(e) if is_init => {
            warn!("Ignoring unreadable configuration: {e:#}");
            AppConfig::default()
        }
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: Some(e.into()),
            };
            return handle_error(err, cli.global.verbose > 0);
        }
    };
    debug!(?config, "Configuration loaded");

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    let verbose = cli.global.verbose > 0;
    match run(cli, &config, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: &AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Check(cmd) => commands::check::execute(cmd, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, &cli.global, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, &cli.global, config, output),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    if !err.is_silent() {
        // stderr, so the message appears even when stdout is redirected.
        let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
            err.format_colored(verbose)
        } else {
            err.format_plain(verbose)
        };
        eprint!("{msg}");
    }

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
