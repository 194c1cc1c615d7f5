//! CLI for doc-issue-sync.
//!
//! Creates one translation issue per documentation file, skipping files that
//! already have an issue with the same title.

use clap::Parser;
use doc_issue_sync::{load_config, RunSummary, Runner, RunnerConfig, RunnerError, TitleStyle};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// doc-issue-sync - Create translation issues for documentation files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Preview issues without creating them.
    #[arg(long)]
    dry_run: bool,

    /// Override the repository owner.
    #[arg(long)]
    owner: Option<String>,

    /// Override the repository name.
    #[arg(long)]
    repo: Option<String>,

    /// Override the branch documents are read from.
    #[arg(long)]
    branch: Option<String>,

    /// Override the title style ("plain" or "hyphenated").
    #[arg(long)]
    title_style: Option<TitleStyle>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // octocrab's rustls client needs a process-wide crypto provider
    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        warn!("A rustls crypto provider was already installed");
    }

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let mut sync = load_config(args.config.as_deref())?;

    if let Some(owner) = args.owner {
        sync.owner = owner;
    }
    if let Some(repo) = args.repo {
        sync.repo = repo;
    }
    if let Some(branch) = args.branch {
        sync.branch = branch;
    }
    if let Some(title_style) = args.title_style {
        sync.title_style = title_style;
    }
    sync.validate("command line")?;

    let runner = Runner::new(RunnerConfig::new(sync, args.token, args.dry_run))?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Existing issues: {}", summary.existing_issues);
    println!("  Directories scanned: {}", summary.directories_scanned);
    println!("  Documents found: {}", summary.documents_found);

    if summary.dry_run {
        println!("  Issues planned: {}", summary.issues_planned);
    } else {
        println!("  Issues created: {}", summary.issues_created);
        println!("  Issues failed: {}", summary.issues_failed);
    }
    println!("  Issues skipped: {}", summary.issues_skipped);
}
