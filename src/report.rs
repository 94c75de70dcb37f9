//! Console text for an import run.
//!
//! Everything here returns a `String`; callers decide where it goes
//! (stdout for the CLI, assertions in tests).

use std::error::Error;
use std::path::Path;

use crate::error::ImportError;
use crate::importer::Outcome;

pub fn banner(path: &Path, endpoint: &str) -> String {
    format!(
        "Importing jobs from: {}\nAPI endpoint: {}\n",
        path.display(),
        endpoint
    )
}

pub fn found_jobs(count: usize) -> String {
    format!("Found {} jobs to import...", count)
}

pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::NoJobs => "No jobs found in JSON file".to_string(),
        Outcome::DryRun(payload) => {
            let body = serde_json::to_string_pretty(payload)
                .unwrap_or_else(|e| format!("<payload could not be serialized: {}>", e));
            format!(
                "Dry run: {} jobs would be sent, nothing was imported.\n{}",
                payload.len(),
                body
            )
        }
        Outcome::Imported { summary, .. } => format!(
            "Success!\n   Added: {}\n   Skipped: {}\n   Message: {}",
            summary.added, summary.skipped, summary.message
        ),
    }
}

/// The error, each underlying cause not already part of its message, and
/// the hint if there is one.
pub fn render_error(err: &ImportError) -> String {
    let mut text = err.to_string();

    let mut cause = err.source();
    while let Some(current) = cause {
        let message = current.to_string();
        if !text.contains(&message) {
            text.push_str(": ");
            text.push_str(&message);
        }
        cause = current.source();
    }

    match err.hint() {
        Some(hint) => format!("{}\n\nHint: {}", text, hint),
        None => text,
    }
}
