// src/reporting.rs
//! Console completion summary for a job run.

use crate::job::JobSummary;
use colored::Colorize;
use std::fmt::Write;

/// Formats the end-of-run summary.
#[must_use]
pub fn format_summary(summary: &JobSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "✨ Analytics job completed successfully!".green().bold());
    let _ = writeln!(out, "📊 Processed {} survey responses", summary.records());
    let _ = writeln!(out, "💡 Generated {} insights", summary.insights());

    match &summary.persisted {
        Some(keys) => {
            let _ = writeln!(out, "   {} {}", "snapshot:".dimmed(), keys.timestamped);
            let _ = writeln!(out, "   {} {}", "latest:".dimmed(), keys.latest);
            let _ = writeln!(out, "   {} {}", "sha256:".dimmed(), keys.sha256);
        }
        None => {
            let _ = writeln!(out, "   {}", "dry run: nothing written".yellow());
        }
    }

    out
}
