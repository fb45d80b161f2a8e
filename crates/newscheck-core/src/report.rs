//! Plain-text matches report.
//!
//! Only accepted and review outcomes are written. Rejected and no-match
//! mentions leave no trace in the report, so it stays dense with leads.

use std::io::{self, Write};

use crate::record::MentionOutcome;

pub const REPORT_TITLE: &str = "Matches Report";

/// Write the report for `outcomes`, in order, to `out`.
pub fn write_report<W: Write>(out: &mut W, outcomes: &[MentionOutcome]) -> io::Result<()> {
    writeln!(out, "{REPORT_TITLE}")?;
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(out)?;

    for outcome in outcomes.iter().filter(|o| o.decision.is_reported()) {
        writeln!(out, "Mention: {}", outcome.mention)?;
        writeln!(out, "Decision: {}", outcome.decision)?;
        for detail in &outcome.details {
            writeln!(out, " - {detail}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Render the report into a string.
pub fn render_report(outcomes: &[MentionOutcome]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(&mut buf, outcomes);
    String::from_utf8_lossy(&buf).into_owned()
}
