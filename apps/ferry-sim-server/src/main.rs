//! ferry-sim-server — CLI and HTTP front end for the ferry queueing simulator.
//!
//! # Example
//!
//! ```bash
//! # Serve the HTTP API (POST /simulate, /simulate/report, /scenarios, /scenarios/compare)
//! ferry-sim-server serve --addr 0.0.0.0:8080
//!
//! # One run of the default day with a fixed seed, CSV output in ./out
//! ferry-sim-server run --seed 42 --output out
//!
//! # Explicit sailings and bookings, reservation smoothing on
//! ferry-sim-server run --departures sailings.csv --reservations bookings.csv --smoothing
//!
//! # What-if runs from a booking-system snapshot
//! ferry-sim-server scenario --snapshot today.json --scenario reducedFleet
//! ferry-sim-server compare --snapshot today.json --seed 7
//! ```

mod handlers;
mod routes;
mod state;
mod types;


use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use ferry_core::{SimRng, SimulationConfig};
use ferry_output::{CsvWriter, SimOutputObserver};
use ferry_scenario::{
    OperationalSnapshot, Scenario, ScenarioDefaults, compare_scenarios, configure,
    snapshot_warnings,
};
use ferry_schedule::{load_departures_csv, load_histogram_csv};
use ferry_sim::{NoopObserver, SimulationResult, simulate_with_observer};
use serde::Serialize;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::routes::create_router;
use crate::state::AppState;
use crate::types::RunReport;

/// Ferry queue simulator
///
/// Minute-stepped model of vehicles queueing for and boarding ferries over one
/// operating day.  Reproducible when the same seed is used.
#[derive(Parser, Debug)]
#[command(name = "ferry-sim-server")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API.
    Serve {
        /// Listen address
        #[arg(long, env = "FERRY_SIM_ADDR", default_value = "127.0.0.1:8080")]
        addr: SocketAddr,

        /// Seed for requests that omit one. When unset, each request draws a random seed.
        #[arg(long, env = "FERRY_SIM_SEED")]
        seed: Option<u64>,
    },

    /// Run one simulation and print a report.
    Run {
        /// JSON `SimulationConfig`. The default 06:00–22:00 day when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// CSV of sailings (`minute_offset,capacity,source_id`), replacing the config's.
        #[arg(long)]
        departures: Option<PathBuf>,

        /// CSV of confirmed bookings per hour (`hour,confirmed`).
        #[arg(long)]
        reservations: Option<PathBuf>,

        /// Pre-place reservations and spread walk-ins uniformly.
        #[arg(long)]
        smoothing: bool,

        /// Random seed for reproducible results. When omitted, a random seed is used.
        #[arg(long, env = "FERRY_SIM_SEED")]
        seed: Option<u64>,

        /// Directory for queue_series.csv, boardings.csv, and wait_times.csv.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the full result (every wait and queue sample) instead of the report.
        #[arg(long)]
        full: bool,
    },

    /// Configure and run one scenario from a snapshot.
    Scenario {
        /// JSON `OperationalSnapshot`
        #[arg(long)]
        snapshot: PathBuf,

        /// base, reducedFleet, or reservationSmoothed
        #[arg(long, default_value = "base")]
        scenario: Scenario,

        #[arg(long, env = "FERRY_SIM_SEED")]
        seed: Option<u64>,

        /// Directory for CSV output.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run every scenario against a snapshot with one seed.
    Compare {
        /// JSON `OperationalSnapshot`
        #[arg(long)]
        snapshot: PathBuf,

        #[arg(long, env = "FERRY_SIM_SEED")]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,ferry_sim_server=info")),
        )
        .init();

    match Cli::parse().command {
        Command::Serve { addr, seed } => serve(addr, seed).await,
        Command::Run { config, departures, reservations, smoothing, seed, output, full } => {
            let mut config = match config {
                Some(path) => read_json::<SimulationConfig>(&path)?,
                None => SimulationConfig::default(),
            };
            if let Some(path) = departures {
                config.departures = load_departures_csv(&path)
                    .with_context(|| format!("loading sailings from {}", path.display()))?;
            }
            if let Some(path) = reservations {
                config.reservation_histogram = load_histogram_csv(&path)
                    .with_context(|| format!("loading bookings from {}", path.display()))?;
            }
            config.use_reservation_smoothing |= smoothing;

            let seed = seed.unwrap_or_else(rand::random);
            let result = run_once(&config, seed, output.as_deref())?;
            if full {
                print_json(&result)
            } else {
                print_json(&RunReport::new(seed, &config, &result))
            }
        }
        Command::Scenario { snapshot, scenario, seed, output } => {
            let snapshot = read_json::<OperationalSnapshot>(&snapshot)?;
            for w in snapshot_warnings(&snapshot) {
                warn!(kind = ?w.kind, severity = ?w.severity, "{}", w.message);
            }
            let config = configure(&snapshot, scenario, &ScenarioDefaults::default())?;
            let seed = seed.unwrap_or_else(rand::random);
            info!(%scenario, seed, "running scenario");
            let result = run_once(&config, seed, output.as_deref())?;
            print_json(&RunReport::new(seed, &config, &result))
        }
        Command::Compare { snapshot, seed } => {
            let snapshot = read_json::<OperationalSnapshot>(&snapshot)?;
            let seed = seed.unwrap_or_else(rand::random);
            let comparison = compare_scenarios(&snapshot, &ScenarioDefaults::default(), seed)?;
            for outcome in &comparison.outcomes {
                info!(
                    scenario = %outcome.scenario,
                    avg_wait = outcome.result.avg_wait_time,
                    max_queue = outcome.result.max_queue_size,
                    vehicles = outcome.result.total_vehicles,
                    "scenario result"
                );
            }
            print_json(&comparison)
        }
    }
}

async fn serve(addr: SocketAddr, seed: Option<u64>) -> Result<()> {
    let app = create_router(AppState::new(ScenarioDefaults::default(), seed));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(addr = %addr, "HTTP server listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}

/// Run `config` once, writing CSV output when `output` is given.
fn run_once(config: &SimulationConfig, seed: u64, output: Option<&Path>) -> Result<SimulationResult> {
    let result = match output {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("creating output in {}", dir.display()))?;
            let mut obs = SimOutputObserver::new(writer, config);
            let result = simulate_with_observer(config, SimRng::new(seed), &mut obs)?;
            if let Some(e) = obs.take_error() {
                bail!("writing output to {}: {e}", dir.display());
            }
            info!(dir = %dir.display(), "output written");
            result
        }
        None => simulate_with_observer(config, SimRng::new(seed), &mut NoopObserver)?,
    };

    info!(
        seed,
        avg_wait = result.avg_wait_time,
        max_queue = result.max_queue_size,
        vehicles = result.total_vehicles,
        "simulation complete"
    );
    Ok(result)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
