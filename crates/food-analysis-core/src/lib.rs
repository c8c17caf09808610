// ABOUTME: Core types for the food analysis server
// ABOUTME: Foundation crate with error handling and the nutrition record model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Food Analysis Core
//!
//! Foundation crate shared by the food analysis server. It changes rarely, which
//! keeps incremental rebuilds of the server crate cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: `NutritionRecord` and the closed `FoodCategory` enumeration

/// Unified error handling with standard error codes
pub mod errors;

/// Nutrition domain model
pub mod models;
