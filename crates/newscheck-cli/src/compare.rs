//! `newscheck compare`: load both CSVs, adjudicate, write the report.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use newscheck_ai::{AnthropicClient, ComparisonRun, ContributionMatcher};
use newscheck_core::CompareConfig;
use tracing::info;

pub struct CompareJob {
    pub mentions: PathBuf,
    pub contributions: PathBuf,
    pub output_dir: PathBuf,
    pub ledger: Option<PathBuf>,
    pub config: CompareConfig,
    pub api_key: Option<String>,
    pub base_url: String,
}

pub struct CompareResult {
    pub run: ComparisonRun,
    pub report_path: PathBuf,
    pub ledger_path: Option<PathBuf>,
    pub elapsed_secs: f64,
}

/// Validate everything up front, then run the comparison.
///
/// Any configuration or input problem fails here, before a single mention
/// is processed or a file written.
pub async fn run_compare(job: CompareJob) -> anyhow::Result<CompareResult> {
    let start = Instant::now();

    job.config
        .validate()
        .context("invalid comparison settings")?;
    let api_key = match job.api_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => bail!("ANTHROPIC_API_KEY is not set (use --api-key or the environment)"),
    };

    let mentions = newscheck_store::load_mentions(&job.mentions)
        .context("loading company mentions")?;
    let corpus = newscheck_store::load_contributions(&job.contributions)
        .context("loading contribution records")?;
    eprintln!(
        "  Read {} mentions and {} contribution records",
        mentions.len(),
        corpus.len()
    );

    let client = AnthropicClient::new(
        api_key,
        &job.base_url,
        Duration::from_secs(job.config.timeout_secs),
    )
    .context("building adjudication client")?;
    let matcher = ContributionMatcher::new(client, &job.config)?;

    let run = matcher.compare(&mentions, &corpus).await;

    let report_path = newscheck_store::write_report_file(&job.output_dir, &run.outcomes)
        .with_context(|| format!("writing report to {}", job.output_dir.display()))?;
    if let Some(ledger) = &job.ledger {
        newscheck_store::write_ledger(ledger, &run.outcomes)
            .with_context(|| format!("writing ledger to {}", ledger.display()))?;
    }

    let elapsed_secs = start.elapsed().as_secs_f64();
    info!(
        report = %report_path.display(),
        elapsed_secs,
        "comparison finished"
    );

    Ok(CompareResult {
        run,
        report_path,
        ledger_path: job.ledger,
        elapsed_secs,
    })
}
