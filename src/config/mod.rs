// ABOUTME: Configuration management module for server settings
// ABOUTME: Exposes the environment-driven ServerConfig shared read-only by all requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: Server configuration from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{load_dotenv, load_dotenv_from, CorsConfig, OpenAiSettings, ServerConfig};
