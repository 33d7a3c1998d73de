// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Fairplay kudos server binary.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use fairplay_server::{build_identity_directory, create_router, logging, version, AppState};
use fairplay_server_kudos::{create_pool, run_migrations, KudosService, SqliteKudosStore};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Fairplay server - HTTP server for match kudos and fair-play standings.
#[derive(Parser, Debug)]
#[command(name = "fairplay-server", about = "Fairplay kudos server", version)]
struct Args {
	/// Path to a TOML config file (defaults to /etc/fairplay/server.toml)
	#[arg(long, env = "FAIRPLAY_SERVER_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version and build information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => fairplay_server_config::load_config_with_file(path)?,
		None => fairplay_server_config::load_config()?,
	};

	logging::init_tracing(&config.logging);

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		database = %config.database.url,
		identity_provider = %config.identity.provider,
		"starting fairplay-server"
	);

	let pool = create_pool(&config.database.url).await?;
	run_migrations(&pool).await?;

	let store = Arc::new(SqliteKudosStore::new(pool));
	let identity = build_identity_directory(&config.identity).await?;
	let state = AppState::new(KudosService::new(store, identity));

	let app = create_router(state)
		.layer(TimeoutLayer::new(Duration::from_secs(
			config.http.request_timeout_secs,
		)))
		.layer(TraceLayer::new_for_http());

	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
