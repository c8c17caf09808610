// ABOUTME: Test utilities for building analyzers and routers around a scripted provider
// ABOUTME: Keeps integration tests focused on request and envelope behavior

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use axum::Router;
use food_analysis_server::analysis::{CompletionSettings, FoodAnalyzer};
use food_analysis_server::config::ServerConfig;
use food_analysis_server::llm::LlmProvider;
use food_analysis_server::server::build_router;

use super::scripted_provider::ScriptedProvider;

/// Smallest valid PNG signature bytes; content is never decoded server-side
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Analyzer backed by `provider`, or unconfigured when `None`
pub fn analyzer_with(provider: Option<Arc<ScriptedProvider>>) -> Arc<FoodAnalyzer> {
    let provider = provider.map(|p| p as Arc<dyn LlmProvider>);
    Arc::new(FoodAnalyzer::new(provider, CompletionSettings::default()).unwrap())
}

/// Full application router around `provider`
pub fn app_with(provider: Option<Arc<ScriptedProvider>>) -> Router {
    build_router(&ServerConfig::default(), analyzer_with(provider))
}

/// Router around a provider replying with `reply`, plus the provider for call counting
pub fn app_replying(reply: &str) -> (Router, Arc<ScriptedProvider>) {
    let provider = Arc::new(ScriptedProvider::replying(reply));
    (app_with(Some(Arc::clone(&provider))), provider)
}
