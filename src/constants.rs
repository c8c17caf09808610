// ABOUTME: System-wide constants and defaults for the food analysis server
// ABOUTME: Upload limits, model call defaults, environment variable names, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded limits and defaults. Anything operators may change lives in
//! [`crate::config::environment`] and only falls back to these values.

/// Service identity used in logs
pub mod service_names {
    /// Service name reported at startup
    pub const FOOD_ANALYSIS_SERVER: &str = "food-analysis-server";
}

/// Upload validation limits
pub mod uploads {
    /// Largest accepted image in bytes (10 MiB)
    pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

    /// Request body ceiling; above the image limit so oversized uploads reach
    /// the validator instead of being cut off by the transport
    pub const MAX_REQUEST_BODY_BYTES: usize = 16 * 1024 * 1024;

    /// Accepted filename extensions, lowercase and without the dot
    pub const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

    /// Content type prefix every upload must carry
    pub const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";

    /// Multipart field carrying the image
    pub const FILE_FIELD_NAME: &str = "file";
}

/// Model invocation defaults
pub mod llm_defaults {
    /// `OpenAI` API base URL
    pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

    /// Multimodal model used for both text and image analysis
    pub const MODEL: &str = "gpt-4o";

    /// Reply length bound
    pub const MAX_TOKENS: u32 = 500;

    /// Low temperature keeps replies close to the requested JSON shape
    pub const TEMPERATURE: f32 = 0.1;
}

/// Environment variable names
pub mod env_vars {
    /// Model credential
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    /// Model API base URL override
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    /// Model identifier override
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
    /// Reply length override
    pub const OPENAI_MAX_TOKENS: &str = "OPENAI_MAX_TOKENS";
    /// Temperature override
    pub const OPENAI_TEMPERATURE: &str = "OPENAI_TEMPERATURE";
    /// Bind address
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Comma-separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Network defaults
pub mod network {
    /// Default bind address
    pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
    /// Default bind port
    pub const DEFAULT_HTTP_PORT: u16 = 8000;
}
