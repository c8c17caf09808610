// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness plus a readiness probe reporting whether the model credential is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! `/health` always answers healthy. `/ready` reports the model configuration
//! without exposing the credential; an unconfigured server is still ready to
//! answer requests, it just answers analysis calls with `config_error`.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::analysis::FoodAnalyzer;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(analyzer: Arc<FoodAnalyzer>) -> Router {
        async fn health_handler() -> Json<Value> {
            Json(json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler(State(analyzer): State<Arc<FoodAnalyzer>>) -> Json<Value> {
            Json(json!({
                "status": "ready",
                "model": analyzer.model(),
                "model_configured": analyzer.is_configured(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .with_state(analyzer)
    }
}
