//! robots — one ring of six charging robots, run until it settles.
//!
//! Each positional argument picks the policy of one ring position:
//! `1` = greedy, `2` = random, `3` = gentlemanly.
//!
//! ```text
//! robots 1 2 3 3 2 1
//! robots --speed 20 --trace-csv output/robots 1 1 2 2 3 3
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use rc_core::{SimConfig, Timings};
use rc_output::{CsvWriter, SimOutputObserver};
use rc_sim::{NoopObserver, Sim, SimBuilder, SimReport};

#[derive(Parser, Debug)]
#[command(name = "robots")]
#[command(version, about = "Simulate a ring of robots sharing charger parts", long_about = None)]
struct Cli {
    /// Policy selector per ring position (1 = greedy, 2 = random, 3 = gentlemanly)
    #[arg(value_name = "SELECTOR", allow_hyphen_values = true)]
    selectors: Vec<String>,

    /// Master seed for the random policy's pauses
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Run this many times faster than the reference pacing
    #[arg(long, default_value_t = 1)]
    speed: u32,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Directory to write charge_trace.csv and run_summary.csv into
    #[arg(long, value_name = "DIR")]
    trace_csv: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let config = SimConfig { timings: Timings::scaled(cli.speed), seed: cli.seed };
    let sim = SimBuilder::from_selectors(config, &cli.selectors)?.build()?;

    println!("=== robots — charging ring ===");
    println!("Robots: {}  |  Seed: {}  |  Speed: {}x", sim.ring().len(), cli.seed, cli.speed.max(1));
    for robot in sim.ring().robots() {
        println!("  robot {}: {}", robot.id().0, robot.strategy());
    }
    println!();

    let report = match &cli.trace_csv {
        Some(dir) => run_with_trace(&sim, dir).await?,
        None      => sim.run(&mut NoopObserver).await?,
    };

    print_report(&report);
    Ok(())
}

async fn run_with_trace(sim: &Sim, dir: &Path) -> Result<SimReport> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating trace directory {}", dir.display()))?;
    let mut obs = SimOutputObserver::new(CsvWriter::new(dir)?);

    let report = sim.run(&mut obs).await?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing charge trace");
    }
    info!(dir = %dir.display(), "charge trace written");
    Ok(report)
}

fn print_report(report: &SimReport) {
    println!(
        "Settled in {:.3} s ({})",
        report.elapsed.as_secs_f64(),
        report.termination.as_str()
    );
    println!();
    println!("{:<8} {:<12} {:>6}", "Robot", "Strategy", "Charge");
    println!("{}", "-".repeat(28));
    for robot in &report.snapshot.robots {
        println!("{:<8} {:<12} {:>6}", robot.id.0, robot.strategy.as_str(), robot.charge);
    }
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}
