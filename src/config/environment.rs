// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads bind address, model credentials, model call settings, and CORS origins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management
//!
//! Configuration is read once at startup and shared read-only by every request.
//! A missing model credential is not a startup failure: the server still comes up
//! and answers analysis requests with a `config_error` envelope.

use crate::constants::{env_vars, llm_defaults, network};
use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Model service settings
#[derive(Clone)]
pub struct OpenAiSettings {
    /// API credential; `None` when not configured
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Reply length bound
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl OpenAiSettings {
    /// Whether a credential is available
    #[must_use]
    pub const fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: llm_defaults::OPENAI_BASE_URL.to_owned(),
            model: llm_defaults::MODEL.to_owned(),
            max_tokens: llm_defaults::MAX_TOKENS,
            temperature: llm_defaults::TEMPERATURE,
        }
    }
}

// Keeps the credential out of logs
impl fmt::Debug for OpenAiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*` for any origin
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub http_host: String,
    /// Bind port
    pub http_port: u16,
    /// Model service settings
    pub openai: OpenAiSettings,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: network::DEFAULT_HTTP_HOST.to_owned(),
            http_port: network::DEFAULT_HTTP_PORT,
            openai: OpenAiSettings::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Call [`load_dotenv`] first so values from a `.env` file are visible.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_host: env_var_or(env_vars::HTTP_HOST, network::DEFAULT_HTTP_HOST),
            http_port: env_var_or(env_vars::HTTP_PORT, &network::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            openai: OpenAiSettings {
                api_key: env::var(env_vars::OPENAI_API_KEY)
                    .ok()
                    .filter(|k| !k.trim().is_empty()),
                base_url: env_var_or(env_vars::OPENAI_BASE_URL, llm_defaults::OPENAI_BASE_URL),
                model: env_var_or(env_vars::OPENAI_MODEL, llm_defaults::MODEL),
                max_tokens: env_var_or(
                    env_vars::OPENAI_MAX_TOKENS,
                    &llm_defaults::MAX_TOKENS.to_string(),
                )
                .parse()
                .context("Invalid OPENAI_MAX_TOKENS value")?,
                temperature: env_var_or(
                    env_vars::OPENAI_TEMPERATURE,
                    &llm_defaults::TEMPERATURE.to_string(),
                )
                .parse()
                .context("Invalid OPENAI_TEMPERATURE value")?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or(env_vars::CORS_ALLOWED_ORIGINS, "*"),
            },
        };

        if !config.openai.has_credential() {
            warn!(
                "{} is not set; analysis endpoints will answer with config_error",
                env_vars::OPENAI_API_KEY
            );
        }

        Ok(config)
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// Human-readable configuration summary without secrets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Food Analysis Server Configuration:\n\
             - HTTP: {}\n\
             - Model: {} (max_tokens={}, temperature={})\n\
             - Model API: {}\n\
             - Credential: {}\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.openai.model,
            self.openai.max_tokens,
            self.openai.temperature,
            self.openai.base_url,
            if self.openai.has_credential() {
                "Configured"
            } else {
                "Missing"
            },
            self.cors.allowed_origins,
        )
    }
}

/// Read an environment variable with a default
/// Load the `.env` file from the working directory or its parents
///
/// Variables already set in the process environment win. Runs before logging
/// is initialized, so the outcome is returned for the caller to log.
///
/// # Errors
///
/// Returns an error if no `.env` file is found or it cannot be parsed
pub fn load_dotenv() -> Result<PathBuf> {
    dotenvy::dotenv().context("No .env file loaded")
}

/// Load a specific env file; already-set variables win
///
/// # Errors
///
/// Returns an error if the file is missing or cannot be parsed
pub fn load_dotenv_from(path: &Path) -> Result<()> {
    dotenvy::from_path(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
