//! # subwatch
//!
//! Watches certificate-transparency logs for subdomains that were not seen
//! before, resolves them and fans the results out to the enabled outputs.

mod bootstrap;
mod di;
mod domains;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use subwatch_domain::{CliOverrides, Config};
use subwatch_jobs::WatchJob;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use bootstrap::{init_logging, load_config};
use di::UseCases;

#[derive(Parser)]
#[command(name = "subwatch")]
#[command(version)]
#[command(about = "Monitor certificate-transparency logs for new subdomains and send notifications")]
struct Cli {
    /// Domains to monitor
    domains: Vec<String>,

    /// File with one domain per line (`#` starts a comment)
    #[arg(short = 'f', long, value_name = "PATH")]
    domains_file: Option<PathBuf>,

    /// Print notifications to stdout
    #[arg(long)]
    stdout: bool,

    /// Send notifications via Telegram
    #[arg(long)]
    telegram: bool,

    /// Publish notifications to RabbitMQ
    #[arg(long)]
    rabbitmq: bool,

    /// Append the per-domain summary line to this file
    #[arg(long, value_name = "PATH")]
    summary_file: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, env = "SUBWATCH_CONFIG")]
    config: Option<String>,

    /// Directory holding the `{domain}_subdomains.txt` baselines
    #[arg(long, value_name = "DIR")]
    baseline_dir: Option<String>,

    /// Keep running and re-check on an interval
    #[arg(long)]
    watch: bool,

    /// Seconds between passes in watch mode
    #[arg(long, value_name = "SECS")]
    interval: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            stdout: self.stdout,
            telegram: self.telegram,
            rabbitmq: self.rabbitmq,
            summary_file: self.summary_file.clone(),
            baseline_dir: self.baseline_dir.clone(),
            watch: self.watch,
            interval_secs: self.interval,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.overrides())?;
    init_logging(&config);

    let domains = domains::collect(&cli.domains, cli.domains_file.as_deref())?;
    if domains.is_empty() {
        anyhow::bail!("No domain to monitor: pass domains as arguments or use --domains-file");
    }

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        domains = domains.len(),
        watch = config.watch.enabled,
        "Configuration loaded"
    );

    let use_cases = UseCases::new(&config)?;

    if config.watch.enabled {
        run_watch(&config, use_cases, domains).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let report = use_cases.watch.execute(&domains).await;
    if report.has_failures() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_watch(config: &Config, use_cases: UseCases, domains: Vec<String>) -> anyhow::Result<()> {
    let shutdown = CancellationToken::new();

    let job = WatchJob::new(use_cases.watch, domains)
        .with_interval(Duration::from_secs(config.watch.interval_secs))
        .with_cancellation(shutdown.clone());
    let handle = Arc::new(job).start();

    let signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received, finishing current pass");
                signal.cancel();
            }
            Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C"),
        }
    });

    handle.await?;
    info!("Watch mode stopped");
    Ok(())
}
