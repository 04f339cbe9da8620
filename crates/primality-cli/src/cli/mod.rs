//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "primality",
    bin_name = "primality",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Check whether an unsigned 64-bit integer is prime",
    long_about = "Primality answers one question per invocation: is the given \
                  unsigned 64-bit integer prime? It uses deterministic trial \
                  division up to the square root of the candidate.",
    after_help = "EXAMPLES:\n\
        \x20 primality check 97\n\
        \x20 primality check 104730 --witness\n\
        \x20 primality --output-format json check 18446744073709551615\n\
        \x20 primality completions bash > /usr/share/bash-completion/completions/primality",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether a single number is prime.
    #[command(
        visible_alias = "c",
        about = "Check whether a number is prime",
        after_help = "EXAMPLES:\n\
            \x20 primality check 541\n\
            \x20 primality check 1_000_003\n\
            \x20 primality check 91 --witness           # 91 = 7 x 13\n\
            \x20 primality check 91 --fail-on-composite # exit status 1"
    )]
    Check(CheckArgs),

    /// Initialise a Primality configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 primality init                      # default location\n\
            \x20 primality init --local              # .primality.toml in CWD\n\
            \x20 primality --config ./p.toml init    # explicit path"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 primality completions bash > ~/.local/share/bash-completion/completions/primality\n\
            \x20 primality completions zsh  > ~/.zfunc/_primality\n\
            \x20 primality completions fish > ~/.config/fish/completions/primality.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Primality configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 primality config get check.show_witness\n\
            \x20 primality config list\n\
            \x20 primality config path"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `primality check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// The number to test.  Kept as text so that negative and oversized
    /// values get a domain error rather than a generic clap one.
    #[arg(
        value_name = "CANDIDATE",
        allow_negative_numbers = true,
        help = "Unsigned integer to test (underscores allowed: 1_000_003)"
    )]
    pub candidate: String,

    /// Show the smallest divisor of a composite.
    #[arg(
        short = 'w',
        long = "witness",
        help = "Show the divisor that proves a number composite"
    )]
    pub witness: bool,

    /// Exit with status 1 when the candidate is not prime.
    #[arg(
        long = "fail-on-composite",
        help = "Exit with status 1 if the number is not prime"
    )]
    pub fail_on_composite: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `primality init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.primality.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `primality completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `primality config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_check_command() {
        let cli = Cli::parse_from(["primality", "check", "97"]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.candidate, "97");
                assert!(!args.witness);
                assert!(!args.fail_on_composite);
            }
            other => panic!("expected Check, got {other:?}"),
        }
    }

    #[test]
    fn check_alias_and_flags() {
        let cli = Cli::parse_from(["primality", "c", "91", "-w", "--fail-on-composite"]);
        if let Commands::Check(args) = cli.command {
            assert!(args.witness);
            assert!(args.fail_on_composite);
        } else {
            panic!("expected Check command");
        }
    }

    #[test]
    fn negative_candidate_reaches_the_domain() {
        // clap must hand "-7" over as a value, not reject it as a flag.
        let cli = Cli::parse_from(["primality", "check", "-7"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.candidate, "-7");
        } else {
            panic!("expected Check command");
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["primality", "check", "5", "-vv", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["primality", "--quiet", "--verbose", "check", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_candidate_is_an_error() {
        assert!(Cli::try_parse_from(["primality", "check"]).is_err());
    }
}
