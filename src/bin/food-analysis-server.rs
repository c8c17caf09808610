// ABOUTME: Server binary for the food analysis API
// ABOUTME: Parses CLI overrides, initializes logging and configuration, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Analysis Server Binary
//!
//! Starts the HTTP API that turns food descriptions and photos into nutrition
//! records.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use food_analysis_server::{
    analysis::FoodAnalyzer,
    config::{self, ServerConfig},
    logging,
    server::FoodAnalysisServer,
};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "food-analysis-server")]
#[command(about = "Food nutrition analysis API backed by a multimodal LLM")]
pub struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load .env before logging so RUST_LOG and LOG_FORMAT from the file apply
    let dotenv = config::load_dotenv();
    logging::init_from_env()?;
    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => warn!("{:#}", e),
    }

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.http_host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("{}", config.summary());

    let analyzer = Arc::new(FoodAnalyzer::from_config(&config)?);
    if !analyzer.is_configured() {
        info!("Serving without a model credential; analysis requests will report config_error");
    }

    if let Err(e) = FoodAnalysisServer::new(config, analyzer).run().await {
        error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
