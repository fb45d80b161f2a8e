//! Timestamped report files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use newscheck_core::{MentionOutcome, write_report};
use tracing::info;

use crate::StoreError;

/// `company_mentions_MATCHES_<YYYYmmdd_HHMMSS>.txt`
pub fn report_file_name(at: DateTime<Local>) -> String {
    format!(
        "company_mentions_MATCHES_{}.txt",
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Write the matches report into `output_dir`, creating it if needed.
pub fn write_report_file(
    output_dir: &Path,
    outcomes: &[MentionOutcome],
) -> Result<PathBuf, StoreError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(report_file_name(Local::now()));

    let mut out = BufWriter::new(File::create(&path)?);
    write_report(&mut out, outcomes)?;
    out.flush()?;

    let reported = outcomes.iter().filter(|o| o.decision.is_reported()).count();
    info!(path = %path.display(), entries = reported, "wrote matches report");
    Ok(path)
}
