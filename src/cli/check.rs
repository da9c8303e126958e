use std::io::IsTerminal;
use std::path::Path;

use colored::Colorize;

use crate::engine::ProcessEngine;
use crate::error::GateError;
use crate::filter::PathExcludeFilter;
use crate::models::{GateConfig, RunOutcome};
use crate::pipeline::{GatePipeline, RunReport};
use crate::report;
use crate::source::GitDiffSource;
use crate::Result;

/// Run the gate against the working tree at `dir` and print the report.
///
/// Every exit path prints the protocol line as the final stdout line,
/// including fatal errors; the returned outcome drives the process exit
/// code.
pub async fn run(dir: &Path, quiet: bool) -> Result<RunOutcome> {
    let report = match run_pipeline(dir, quiet).await {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{}", format!("Error: {}", err).red());
            RunReport {
                outcome: RunOutcome::Fail,
                lines: report::render_failure(&err),
            }
        }
    };

    print_report(&report, quiet);
    Ok(report.outcome)
}

async fn run_pipeline(dir: &Path, quiet: bool) -> std::result::Result<RunReport, GateError> {
    let config = GateConfig::load(dir)
        .map_err(|e| GateError::Config(format!("failed to load configuration: {}", e)))?;

    let filter = PathExcludeFilter::from_config(&config)
        .map_err(|e| GateError::Config(format!("bad exclusion patterns: {}", e)))?;

    let show_progress = !quiet && std::io::stderr().is_terminal();
    let engine = ProcessEngine::resolve(&config.engine_home, show_progress)?;
    let source = GitDiffSource::new(dir);

    GatePipeline::new(source, filter, engine, config).run().await
}

fn print_report(report: &RunReport, quiet: bool) {
    for line in &report.lines {
        if quiet {
            println!("{}", line);
            continue;
        }
        // Color only the human-facing verdict lines; the protocol line
        // must stay byte-exact for the wrapping process.
        if line.starts_with("PASS:") {
            println!("{}", line.green());
        } else if line.starts_with("FAIL:") || line.starts_with("Gate aborted:") {
            println!("{}", line.red());
        } else {
            println!("{}", line);
        }
    }
}
