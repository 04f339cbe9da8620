//! One module per subcommand.  Each exposes an `execute` entry point.

pub mod check;
pub mod completions;
pub mod config;
pub mod init;
