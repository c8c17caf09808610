// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Builds the Cross-Origin Resource Sharing layer from the configured origin list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// Parse the configured origins; `None` means any origin
fn parse_origins(allowed_origins: &str) -> Option<Vec<HeaderValue>> {
    if allowed_origins.trim().is_empty() || allowed_origins.trim() == "*" {
        return None;
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    // Nothing parseable falls back to any origin
    (!origins.is_empty()).then_some(origins)
}

/// Configure CORS for the analysis API
///
/// `CORS_ALLOWED_ORIGINS` is either `*` or a comma-separated origin list.
/// Browser clients upload photos as multipart forms and post JSON, so only
/// `GET`, `POST` and `OPTIONS` are allowed.
///
/// ```bash
/// # Allow all origins (development)
/// export CORS_ALLOWED_ORIGINS="*"
///
/// # Allow specific origins (production)
/// export CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
/// ```
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    let allow_origin =
        parse_origins(&config.allowed_origins).map_or_else(AllowOrigin::any, AllowOrigin::list);

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
