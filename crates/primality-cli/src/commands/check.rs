//! Implementation of the `primality check` command.
//!
//! Responsibility: parse the candidate, classify it with `primality-core`,
//! and display the verdict. No arithmetic lives here.

use tracing::{info, instrument};

use primality_core::{Verdict, VerdictKind, parse_candidate};

use crate::{
    cli::{CheckArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `primality check` command.
#[instrument(skip_all, fields(candidate = %args.candidate))]
pub fn execute(args: CheckArgs, config: &AppConfig, output: OutputManager) -> CliResult<()> {
    let candidate = parse_candidate(&args.candidate)?;
    let verdict = Verdict::classify(candidate.get());

    info!(
        candidate = verdict.candidate(),
        prime = verdict.is_prime(),
        witness = verdict.witness(),
        "Candidate checked"
    );

    let show_witness = args.witness || config.check.show_witness;
    match output.format() {
        OutputFormat::Json => output.json(&verdict)?,
        _ => {
            let line = render_line(&verdict, show_witness);
            if verdict.is_prime() {
                output.success(&line)?;
            } else {
                output.negative(&line)?;
            }
        }
    }

    if args.fail_on_composite && !verdict.is_prime() {
        return Err(CliError::NotPrime {
            candidate: verdict.candidate(),
        });
    }

    Ok(())
}

/// One-line human description of a verdict.
fn render_line(verdict: &Verdict, show_witness: bool) -> String {
    match verdict.kind() {
        VerdictKind::Composite { .. } if show_witness => verdict.to_string(),
        VerdictKind::Unit if show_witness => format!(
            "{} is not prime (0 and 1 are neither prime nor composite)",
            verdict.candidate()
        ),
        VerdictKind::Prime => format!("{} is prime", verdict.candidate()),
        _ => format!("{} is not prime", verdict.candidate()),
    }
}
