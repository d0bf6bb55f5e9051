// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

mod config;
mod version;

use anyhow::Result;
use orchis_core::{DashboardHooks, DashboardState, SampleData};
use orchis_types::DashboardSnapshot;
use orchis_web::AppState;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Handle command line arguments
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                println!("Orchis - Greenhouse Orchid Monitoring");
                println!("Version: {}", version::VERSION);
                println!();
                println!("Usage: orchis [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help    Print this help message");
                println!("  -v, --version Print version");
                return Ok(());
            }
            "--version" | "-v" => {
                println!("{}", version::VERSION);
                return Ok(());
            }
            _ => {
                // Continue to normal execution for other args or no args
            }
        }
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    runtime.block_on(run())
}

async fn run() -> Result<()> {
    // Initialize tracing with env filter support
    // Respects RUST_LOG environment variable
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = config::AppConfig::load()?;

    info!("🚀 Starting Orchis - Greenhouse Orchid Monitoring");
    info!("📋 Configuration Summary:");
    info!("   Greenhouse: {}", config.greenhouse.name);
    info!(
        "   Snapshot: {}",
        config
            .greenhouse
            .snapshot_path
            .as_deref()
            .unwrap_or("(built-in samples)")
    );
    info!("   Bind: {}:{}", config.server.bind, config.server.port);
    info!("   Debug mode: {}", config.system.debug_mode);

    // Read the supplier snapshot if one is configured; anything missing or
    // malformed degrades to the built-in sample data
    let snapshot = load_snapshot(config.greenhouse.snapshot_path.as_deref());

    let samples = SampleData::builtin();
    let state = DashboardState::from_snapshot(&snapshot, &samples);
    info!(
        "🌱 Dashboard state ready: {} metrics, {} orchids, {} alerts",
        state.metrics.len(),
        state.orchids.len(),
        state.alerts.len()
    );

    let app_state = AppState::new(state, DashboardHooks::default(), &config.greenhouse.name);

    orchis_web::start_web_server(app_state, &config.server.bind, config.server.port)
        .await
        .map_err(|e| anyhow::anyhow!("Web server failed: {e}"))?;

    Ok(())
}

/// Load and validate the supplier snapshot from disk
fn load_snapshot(path: Option<&str>) -> DashboardSnapshot {
    let Some(path) = path else {
        return DashboardSnapshot::default();
    };

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("⚠️ Failed to read snapshot {}: {}", path, e);
            return DashboardSnapshot::default();
        }
    };

    let snapshot: DashboardSnapshot = match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("⚠️ Failed to parse snapshot {}: {}", path, e);
            return DashboardSnapshot::default();
        }
    };

    if let Err(e) = snapshot.validate() {
        warn!("⚠️ Snapshot {} failed validation: {}", path, e);
        return DashboardSnapshot::default();
    }

    info!("✅ Loaded supplier snapshot from {}", path);
    snapshot
}
