//! Implementation of the `vitrina check` command.

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::PathBuf;

use miette::Report;
use owo_colors::OwoColorize;
use serde::Serialize;
use vitrina::{lint_text, ShortcodeContext, TokenIssue};

use crate::output::TokenDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Content files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// JSON context file; enables missing-context checks
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for a single finding.
#[derive(Serialize)]
struct CheckFinding {
    file: String,
    token: String,
    message: String,
    suggestions: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs, verbose: bool) -> miette::Result<i32> {
    let ctx = match &args.context {
        Some(path) => {
            let content = read_to_string(path).map_err(|e| {
                miette::miette!("cannot read context file {}: {}", path.display(), e)
            })?;
            Some(
                serde_json::from_str::<ShortcodeContext>(&content)
                    .map_err(|e| miette::miette!("invalid context file: {}", e))?,
            )
        }
        None => None,
    };

    let mut findings = Vec::new();
    let mut reports = Vec::new();

    for path in &args.files {
        let content = read_to_string(path)
            .map_err(|e| miette::miette!("cannot read {}: {}", path.display(), e))?;
        let warnings = lint_text(&content, ctx.as_ref());

        if warnings.is_empty() && verbose && !args.json {
            println!("{} {}", "OK".green(), path.display());
        }
        // Lint warnings arrive in source order, so counting repeats of the
        // same token text points each diagnostic at its own occurrence.
        let mut occurrences: HashMap<String, usize> = HashMap::new();
        for warning in warnings {
            let occurrence = occurrences.entry(warning.raw.clone()).or_insert(0);
            reports.push(TokenDiagnostic::new(path, &content, &warning, *occurrence));
            *occurrence += 1;
            let suggestions = match &warning.issue {
                TokenIssue::UnknownToken { suggestions } => suggestions.clone(),
                TokenIssue::MissingContext { .. } => Vec::new(),
            };
            findings.push(CheckFinding {
                file: path.display().to_string(),
                token: warning.raw.clone(),
                message: warning.to_string(),
                suggestions,
            });
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&findings).expect("JSON serialization should not fail")
        );
    } else {
        for report in reports {
            eprintln!("{:?}", Report::new(report));
        }
    }

    if findings.is_empty() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
