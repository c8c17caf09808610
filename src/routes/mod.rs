// ABOUTME: Route module organization for the food analysis HTTP endpoints
// ABOUTME: Groups analysis and health routes, each exposing a Router constructor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the food analysis server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to [`crate::analysis::FoodAnalyzer`].

/// Food text and image analysis routes
pub mod food;
/// Health check and readiness routes
pub mod health;

/// Food analysis route handlers
pub use food::FoodRoutes;
/// Text analysis request body
pub use food::TextAnalysisRequest;
/// Health route handlers
pub use health::HealthRoutes;
