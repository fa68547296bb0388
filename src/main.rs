//! Query Eval CLI
//!
//! Runs the evaluation suite against a query-answering HTTP API and
//! enforces quality thresholds.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use query_eval::{
    config::Config,
    queries::QuerySet,
    report::EvaluationReport,
    runner::Evaluator,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Query Eval - evaluation harness for a query-answering API
#[derive(Parser)]
#[command(name = "query-eval")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full evaluation suite and write the report
    Run {
        /// Base URL of the service under evaluation
        #[arg(short, long)]
        base_url: Option<String>,

        /// Output path for the JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that the service is up and healthy
    Health {
        /// Base URL of the service under evaluation
        #[arg(short, long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { base_url, output } => cmd_run(base_url, output).await,
        Commands::Health { base_url } => cmd_health(base_url).await,
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(base_url: Option<String>, output: Option<PathBuf>) -> Result<Config> {
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(base_url) = base_url {
        config.api.base_url = base_url;
    }
    if let Some(output) = output {
        config.api.report_path = output;
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

async fn cmd_run(base_url: Option<String>, output: Option<PathBuf>) -> Result<()> {
    let config = load_config(base_url, output)?;
    let query_set = QuerySet::default();

    println!("Evaluating {} against: {}", plural(&query_set), config.api.base_url);

    let start = Instant::now();
    let evaluator = Evaluator::new(&config);
    let (report, violations) = evaluator
        .run(&query_set)
        .await
        .context("Failed to run evaluation")?;

    print_summary(&report);
    println!("Report saved to: {}", evaluator.report_path().display());
    println!("Total time: {:.1}s", start.elapsed().as_secs_f64());

    if !violations.is_empty() {
        eprintln!("\n{} threshold violation(s):", violations.len());
        for violation in &violations {
            eprintln!("  - {}", violation);
        }
        bail!("evaluation failed quality thresholds");
    }

    println!("\nAll quality thresholds met.");
    Ok(())
}

async fn cmd_health(base_url: Option<String>) -> Result<()> {
    let config = load_config(base_url, None)?;

    let evaluator = Evaluator::new(&config);
    evaluator
        .health_check()
        .await
        .context("Service is not healthy")?;

    println!("Service at {} is healthy.", config.api.base_url);
    Ok(())
}

fn plural(query_set: &QuerySet) -> String {
    format!(
        "{} queries in {} categories",
        query_set.query_count(),
        query_set.category_count()
    )
}

fn print_summary(report: &EvaluationReport) {
    println!("\n========== Evaluation Results ==========");
    for (category, result) in report.iter() {
        println!(
            "{:<20} avg {:.2}  ({} queries)",
            category, result.avg_quality_score, result.total_queries
        );
    }
    println!("========================================");
}
