//! Output formatting utilities for CLI.

use conquest::{SessionOutcome, SessionSummary};
use serde::Serialize;
use std::fmt::Write;

/// JSON-serializable end-of-game report.
#[derive(Debug, Serialize)]
pub(super) struct JsonSessionReport {
    /// Random seed used.
    pub(super) seed: u64,
    /// Everything else about the session.
    #[serde(flatten)]
    pub(super) summary: SessionSummary,
}

/// Format a session summary as human-readable text.
pub(super) fn format_text(seed: u64, summary: &SessionSummary) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "\nGame Summary (seed: {seed})");
    let result = match summary.outcome {
        SessionOutcome::MissionComplete => "mission complete",
        SessionOutcome::Quit => "quit",
    };
    let _ = writeln!(output, "  Result:  {result}");
    let _ = writeln!(output, "  Mission: {}", summary.mission);
    let _ = writeln!(output, "  Battles: {}", summary.battles);
    let _ = writeln!(output);
    let _ = writeln!(output, "Final map:");
    for (index, territory) in summary.territories.iter().enumerate() {
        let _ = writeln!(
            output,
            "  {}. {} ({}): {} troops",
            index + 1,
            territory.name,
            territory.owner,
            territory.troops
        );
    }

    output
}
