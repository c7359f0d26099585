//! `license-assignr` — report and remove directory license assignments by assignment path.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and set up logging.
//! 2. Text helpers (`encode`, `decode`, `csv`, `sku resolve`) run offline ([`text`], [`sku`]).
//! 3. Everything else loads config ([`config::load_config`]) and connects to the
//!    directory service ([`graph`]).
//! 4. `report` snapshots the covered licenses and classifies their holders ([`license`]),
//!    then renders the requested format ([`report`]).
//! 5. `remove` runs the throttled removal driver over the same snapshot and exits `1`
//!    if any removal failed.

mod cli;
mod config;
mod graph;
mod license;
mod models;
mod report;
mod sku;
mod text;

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, RemoveArgs, ReportArgs, ReportFormat, SkuCommand};
use config::{load_config, Config};
use graph::client::GraphClient;
use graph::DirectoryService;
use license::classifier::SkuScope;
use license::removal::{AutoConfirm, Confirm, PromptConfirm, RemovalDriver, TokioThrottle, WhatIf};
use license::{snapshot, Snapshot};
use models::{AssignmentPath, RemovablePath, RemovalStatus, ReportRow};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match &cli.command {
        Command::Encode { text: arg, encoding } => {
            let input = read_input(arg.as_deref())?;
            println!("{}", text::codec::base64_encode(&input, (*encoding).into()));
        }
        Command::Decode { text: arg, encoding } => {
            let input = read_input(arg.as_deref())?;
            println!("{}", text::codec::base64_decode(&input, (*encoding).into())?);
        }
        Command::Csv { header, text: arg } => {
            let input = read_input(arg.as_deref())?;
            println!("{}", text::csv::to_csv(header, &input)?);
        }
        Command::Sku {
            command: SkuCommand::Resolve { code },
        } => match sku::resolve(code) {
            Some(name) => println!("{}", name),
            None => eprintln!("{} no display name known for {}", "warning:".yellow(), code),
        },
        Command::Sku {
            command: SkuCommand::List,
        } => {
            let config = load(&cli)?;
            let client = GraphClient::connect(&config.graph).await?;
            let mut skus = client.list_subscribed_skus().await?;
            skus.sort_by_key(|s| s.label().to_lowercase());
            report::terminal::render_skus(&skus);
        }
        Command::Report(args) => {
            args.validate()?;
            let config = load(&cli)?;
            let client = GraphClient::connect(&config.graph).await?;
            run_report(&client, args, cli.quiet).await?;
        }
        Command::Remove(args) => {
            let config = load(&cli)?;
            let client = GraphClient::connect(&config.graph).await?;
            let any_failed = run_remove(&client, &config, args, cli.verbose, cli.quiet).await?;
            if any_failed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default = if verbose {
        "license_assignr=debug"
    } else if quiet {
        "license_assignr=warn"
    } else {
        "license_assignr=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn load(cli: &Cli) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    load_config(&cwd, cli.config.as_deref())
}

/// Use the argument if given, else all of stdin minus its final line break.
fn read_input(arg: Option<&str>) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text.to_string());
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}

async fn fetch_snapshot(service: &dyn DirectoryService, scope: &SkuScope, quiet: bool) -> Result<Snapshot> {
    let spinner = if !quiet {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.set_message("Fetching license assignments...");
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let result = snapshot(service, scope).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let snap = result?;

    if !quiet {
        for sku in &snap.skus {
            eprintln!(
                "  {} {} ({} of {} units consumed)",
                "→".cyan(),
                sku.label(),
                sku.consumed_units,
                sku.total_units
            );
        }
    }
    Ok(snap)
}

async fn run_report(service: &dyn DirectoryService, args: &ReportArgs, quiet: bool) -> Result<()> {
    let snap = fetch_snapshot(service, &args.scope.scope(), quiet).await?;
    let paths = args.path.paths();

    let rows: Vec<&ReportRow> = paths
        .iter()
        .filter_map(|p| snap.classification.get(p))
        .flatten()
        .collect();

    let rendered = match args.format {
        ReportFormat::Terminal => {
            return report::terminal::render_classification(&snap, &paths, quiet);
        }
        ReportFormat::Json => serde_json::to_string_pretty(&rows)?,
        ReportFormat::Csv => {
            let owned: Vec<ReportRow> = rows.into_iter().cloned().collect();
            report::csv::render(&owned)
        }
    };

    write_output(&rendered, args.output.as_deref(), quiet)
}

fn write_output(rendered: &str, output: Option<&Path>, quiet: bool) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if !quiet {
                eprintln!("  {} report written to {}", "✓".green(), path.display());
            }
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

/// Returns whether any removal failed.
async fn run_remove(
    service: &dyn DirectoryService,
    config: &Config,
    args: &RemoveArgs,
    verbose: bool,
    quiet: bool,
) -> Result<bool> {
    let path = RemovablePath::from(args.path);
    let snap = fetch_snapshot(service, &args.scope.scope(), quiet).await?;

    let rows = snap
        .classification
        .get(&AssignmentPath::from(path))
        .cloned()
        .unwrap_or_default();
    if rows.is_empty() {
        if !quiet {
            eprintln!("  {} nothing to remove", "✓".green());
        }
        return Ok(false);
    }

    let delay = Duration::from_secs(args.delay.unwrap_or(config.removal.throttle_delay_seconds));
    let mut confirm: Box<dyn Confirm> = if args.what_if {
        Box::new(WhatIf)
    } else if args.yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(PromptConfirm::default())
    };

    let throttle = TokioThrottle;
    let driver = RemovalDriver::new(service, &throttle, delay);
    let outcomes = driver.run(&rows, path, confirm.as_mut()).await?;

    report::terminal::render_outcomes(&outcomes, verbose, quiet);

    Ok(outcomes
        .iter()
        .any(|o| matches!(o.status, RemovalStatus::Failed(_))))
}
