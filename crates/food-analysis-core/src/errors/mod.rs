// ABOUTME: Unified error handling for the food analysis pipeline
// ABOUTME: Defines ErrorCode, AppError, and convenience constructors used by every layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure in the server is expressed as an [`AppError`] carrying an
//! [`ErrorCode`]. The HTTP layer never turns these into error statuses; it maps
//! the code onto the `type` tag of the response envelope instead.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Input
    /// Caller supplied no food name or no file
    MissingInput,
    /// Request body could not be decoded
    InvalidInput,
    /// Upload has a non-image content type or a disallowed extension
    FileValidation,
    /// Upload is empty, too large, or could not be read
    Encoding,

    // Configuration
    /// Model credential is not configured
    ConfigMissing,

    // Model reply
    /// No decodable JSON payload in the model reply
    ParseError,

    // External services
    /// Upstream model call failed
    ExternalServiceError,
    /// Upstream rejected our credential
    ExternalAuthFailed,
    /// Upstream throttled the request
    ExternalRateLimited,
    /// Upstream account has no remaining quota
    QuotaExceeded,

    // Internal
    /// Anything else
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MissingInput => "Required input is missing",
            Self::InvalidInput => "The provided input is invalid",
            Self::FileValidation => "The uploaded file is not an accepted image",
            Self::Encoding => "The uploaded file could not be encoded",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ParseError => "The model reply could not be parsed",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalAuthFailed => "Authentication with external service failed",
            Self::ExternalRateLimited => "External service rate limit exceeded",
            Self::QuotaExceeded => "External service quota exceeded",
            Self::InternalError => "An internal server error occurred",
        }
    }

    /// Whether the upstream refused the call for quota or rate reasons
    #[must_use]
    pub const fn is_quota_related(&self) -> bool {
        matches!(self, Self::ExternalRateLimited | Self::QuotaExceeded)
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured diagnostic details
    pub details: Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Object(Map::new()),
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Raw model reply attached to a parse failure, if any
    #[must_use]
    pub fn raw_reply(&self) -> Option<&str> {
        self.details.get("raw").and_then(Value::as_str)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Required caller input is missing
    #[must_use]
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingInput, message)
    }

    /// Request body is malformed
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Upload rejected by type or extension checks
    #[must_use]
    pub fn file_validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::FileValidation, message)
    }

    /// Upload could not be encoded
    #[must_use]
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Encoding, message)
    }

    /// Required configuration is absent
    #[must_use]
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Model reply had no decodable JSON; the raw reply is kept in `details.raw`
    #[must_use]
    pub fn parse(message: impl Into<String>, raw: &str) -> Self {
        Self::new(ErrorCode::ParseError, message).with_details(serde_json::json!({ "raw": raw }))
    }

    /// External service error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Upstream quota exhausted
    #[must_use]
    pub fn quota_exceeded(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::QuotaExceeded, message)
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(format!("JSON serialization failed: {error}")).with_source(error)
    }
}
