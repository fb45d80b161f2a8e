mod compare;
mod display;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use newscheck_core::CompareConfig;
use newscheck_core::config::{
    DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TOP_K,
};
use tracing::Level;

/// Match company mentions from news coverage against campaign-finance contributors.
#[derive(Parser)]
#[command(name = "newscheck")]
#[command(version)]
struct Cli {
    /// Log at DEBUG instead of INFO.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare every mention against the contribution records and write a matches report.
    Compare {
        /// Mention CSV with a "Company/Organization Name" column.
        #[arg(long, short = 'm')]
        mentions: PathBuf,

        /// Contribution CSV with "Contributor Name" and "Contributor Employer" columns.
        #[arg(long, short = 'c')]
        contributions: PathBuf,

        /// Directory for the timestamped report (created if missing).
        #[arg(long, short = 'o', default_value = "output")]
        output_dir: PathBuf,

        /// Also write a per-mention decision ledger CSV here.
        #[arg(long)]
        ledger: Option<PathBuf>,

        #[command(flatten)]
        settings: CompareArgs,

        #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        #[arg(
            long,
            env = "ANTHROPIC_BASE_URL",
            default_value = newscheck_ai::anthropic::DEFAULT_BASE_URL
        )]
        base_url: String,
    },

    /// Show the shortlist and gate band for one name. Never calls the service.
    Shortlist {
        name: String,

        #[arg(long, short = 'c')]
        contributions: PathBuf,

        #[command(flatten)]
        gate: GateArgs,
    },

    /// Print the canonical form of each name.
    Normalize {
        #[arg(required = true)]
        text: Vec<String>,
    },
}

/// Shortlist size and gate thresholds, shared by `compare` and `shortlist`.
#[derive(Args)]
struct GateArgs {
    /// Candidates kept per reference field.
    #[arg(long, env = "NEWSCHECK_TOP_K", default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Best scores at or below this are rejected without adjudication.
    #[arg(
        long,
        env = "NEWSCHECK_LOW_THRESHOLD",
        default_value_t = DEFAULT_LOW_THRESHOLD
    )]
    low_threshold: u8,

    #[arg(
        long,
        env = "NEWSCHECK_HIGH_THRESHOLD",
        default_value_t = DEFAULT_HIGH_THRESHOLD
    )]
    high_threshold: u8,
}

#[derive(Args)]
struct CompareArgs {
    #[command(flatten)]
    gate: GateArgs,

    #[arg(long, env = "NEWSCHECK_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    #[arg(
        long,
        env = "NEWSCHECK_MAX_TOKENS",
        default_value_t = DEFAULT_MAX_TOKENS
    )]
    max_tokens: u32,

    /// Per-call timeout for the adjudication service, in seconds.
    #[arg(
        long,
        env = "NEWSCHECK_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    timeout_secs: u64,
}

impl From<GateArgs> for CompareConfig {
    fn from(args: GateArgs) -> Self {
        Self {
            top_k: args.top_k,
            low_threshold: args.low_threshold,
            high_threshold: args.high_threshold,
            ..CompareConfig::default()
        }
    }
}

impl From<CompareArgs> for CompareConfig {
    fn from(args: CompareArgs) -> Self {
        Self {
            model: args.model,
            max_tokens: args.max_tokens,
            timeout_secs: args.timeout_secs,
            ..CompareConfig::from(args.gate)
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!("newscheck v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Compare {
            mentions,
            contributions,
            output_dir,
            ledger,
            settings,
            api_key,
            base_url,
        } => {
            let job = compare::CompareJob {
                mentions,
                contributions,
                output_dir,
                ledger,
                config: settings.into(),
                api_key,
                base_url,
            };
            let result = compare::run_compare(job).await?;
            display::print_compare_result(&result);
        }
        Commands::Shortlist {
            name,
            contributions,
            gate,
        } => {
            let config = CompareConfig::from(gate);
            config.validate().context("invalid shortlist settings")?;
            let corpus = newscheck_store::load_contributions(&contributions)
                .context("loading contribution records")?;
            display::print_shortlist(&name, &corpus, &config);
        }
        Commands::Normalize { text } => {
            for t in &text {
                println!("{t}\t{}", newscheck_core::normalize(t));
            }
        }
    }

    Ok(())
}
