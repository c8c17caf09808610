// ABOUTME: HTTP server assembly for the food analysis API
// ABOUTME: Composes routes with request ID, tracing, and CORS layers and serves them with axum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{body::Body, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::analysis::FoodAnalyzer;
use crate::config::ServerConfig;
use crate::middleware::{
    make_request_span, propagate_request_id_layer, set_request_id_layer, setup_cors,
};
use crate::routes::{FoodRoutes, HealthRoutes};

/// Food analysis HTTP server
pub struct FoodAnalysisServer {
    config: ServerConfig,
    analyzer: Arc<FoodAnalyzer>,
}

impl FoodAnalysisServer {
    /// Create a server from configuration and a ready analyzer
    #[must_use]
    pub const fn new(config: ServerConfig, analyzer: Arc<FoodAnalyzer>) -> Self {
        Self { config, analyzer }
    }

    /// Build the complete router with all middleware applied
    pub fn router(&self) -> Router {
        build_router(&self.config, Arc::clone(&self.analyzer))
    }

    /// Bind and serve until Ctrl+C
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self) -> Result<()> {
        let address = self.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;

        info!("Food analysis server listening on http://{}", address);
        display_available_endpoints(&address);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("Food analysis server stopped");
        Ok(())
    }
}

/// Compose food and health routes behind the shared middleware stack
pub fn build_router(config: &ServerConfig, analyzer: Arc<FoodAnalyzer>) -> Router {
    Router::new()
        .merge(FoodRoutes::routes(Arc::clone(&analyzer)))
        .merge(HealthRoutes::routes(analyzer))
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
                .layer(propagate_request_id_layer())
                .layer(setup_cors(&config.cors)),
        )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(address: &str) {
    info!("=== Available API Endpoints ===");
    info!("   Text Analysis:     POST http://{address}/api/food/analyze/text");
    info!("   Image Analysis:    POST http://{address}/api/food/analyze");
    info!("   Health Check:      GET  http://{address}/health");
    info!("   Readiness:         GET  http://{address}/ready");
    info!("=== End of Endpoint List ===");
}
