mod community;
mod config;
mod errors;
mod fraud;
mod insights;
mod mockdata;
mod performance;
mod recruitment;
mod routes;
mod state;
mod stats;
mod store;
mod workforce;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::mockdata::{generators_for, run_generators, GenerateTarget};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::DataStore;

#[derive(Parser, Debug)]
#[command(name = "stafftract", version, about = "StaffTract.AI mock analytics backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API (default)
    Serve,
    /// Write mock datasets into the data directory
    Generate {
        #[arg(value_enum, default_value = "all")]
        target: GenerateTarget,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Repair community data and its region summary in place
    Repair {
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Generate { target, seed } => generate(config, target, seed).await,
        Commands::Repair { seed } => repair(config, seed).await,
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting StaffTract API v{}", env!("CARGO_PKG_VERSION"));
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let state = AppState::new(config);

    info!("Serving datasets from {}", state.store.base_dir().display());
    let files = &state.config.files;
    for file in [
        &files.recruitment,
        &files.workforce,
        &files.performance,
        &files.community,
        &files.fraud,
        &files.insights,
    ] {
        if !state.store.exists(file) {
            warn!("{file} not found; its endpoints will report empty data");
        }
    }

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn generate(config: Config, target: GenerateTarget, seed: Option<u64>) -> Result<()> {
    let summary = tokio::task::spawn_blocking(move || {
        let store = DataStore::new(&config.data_dir);
        let generators = generators_for(&config, target);
        let mut rng = seeded_rng(seed);
        run_generators(&store, &generators, &mut rng)
    })
    .await?;

    info!(
        "Generation finished: {} succeeded, {} failed",
        summary.succeeded.len(),
        summary.failed.len()
    );
    if !summary.failed.is_empty() {
        bail!("generators failed: {}", summary.failed.join(", "));
    }
    Ok(())
}

async fn repair(config: Config, seed: Option<u64>) -> Result<()> {
    let report = tokio::task::spawn_blocking(move || {
        let store = DataStore::new(&config.data_dir);
        let mut rng = seeded_rng(seed);
        community::repair::run_repair(&store, &config.files, &mut rng)
    })
    .await??;

    info!(
        "Repair finished: {} records kept, {} dropped, {} regions kept",
        report.records_kept, report.records_dropped, report.regions_kept
    );
    Ok(())
}
