// ABOUTME: Main library entry point for the food analysis server
// ABOUTME: Turns food descriptions and photos into nutrition records via a multimodal LLM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Food Analysis Server
//!
//! An HTTP service that asks a multimodal language model for the nutrition
//! facts of a food, either from a typed name or description or from an
//! uploaded photo, and returns them as structured JSON.
//!
//! ## Endpoints
//!
//! - `POST /api/food/analyze/text` with `{"food_name": "..."}`
//! - `POST /api/food/analyze` with a multipart `file` field
//! - `GET /health`, `GET /ready`
//!
//! Every analysis outcome is answered with HTTP 200; the `success` flag and
//! the `type` tag of the envelope tell callers what happened.
//!
//! ## Architecture
//!
//! - **Analysis**: prompt building, upload validation, payload extraction,
//!   category normalization, response envelopes
//! - **LLM**: provider trait and the `OpenAI` chat-completions client
//! - **Routes**: thin axum handlers
//! - **Config**: environment-driven server configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use food_analysis_server::analysis::FoodAnalyzer;
//! use food_analysis_server::config::ServerConfig;
//! use food_analysis_server::server::FoodAnalysisServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let analyzer = Arc::new(FoodAnalyzer::from_config(&config)?);
//!     FoodAnalysisServer::new(config, analyzer).run().await
//! }
//! ```

/// Food analysis pipeline
pub mod analysis;

/// Environment configuration
pub mod config;

/// Limits, defaults, and environment variable names
pub mod constants;

/// LLM provider abstraction and `OpenAI` client
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// HTTP routes
pub mod routes;

/// Server assembly
pub mod server;

// Foundation crate re-exports
pub use food_analysis_core::{errors, models};
