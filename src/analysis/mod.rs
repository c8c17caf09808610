// ABOUTME: Food analysis pipeline from caller input to normalized nutrition records
// ABOUTME: Prompting, upload validation, payload extraction, category normalization, envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Analysis
//!
//! The pipeline for both endpoints is the same shape:
//!
//! 1. validate the caller input (text or uploaded image)
//! 2. build a prompt and call the model once
//! 3. locate and decode the JSON payload in the free-text reply
//! 4. normalize categories (image path) and wrap the result in an envelope
//!
//! [`FoodAnalyzer`] owns the model provider and drives these steps; every
//! outcome, success or failure, becomes an [`AnalysisResponse`].

pub mod analyzer;
pub mod extraction;
pub mod normalize;
pub mod prompts;
pub mod response;
pub mod validation;

pub use analyzer::FoodAnalyzer;
pub use extraction::{extract_records, ExtractionStrategy};
pub use normalize::normalize_categories;
pub use response::{AnalysisResponse, AnalysisRoute, AnalysisType};
pub use validation::{validate_upload, EncodedImage, ImageUpload};

use crate::config::OpenAiSettings;
use crate::constants::llm_defaults;
use crate::llm::ChatRequest;

/// Per-call model settings shared by both endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    /// Model identifier
    pub model: String,
    /// Reply length bound
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl CompletionSettings {
    /// Stamp these settings onto a request
    #[must_use]
    pub fn apply(&self, request: ChatRequest) -> ChatRequest {
        request
            .with_model(self.model.clone())
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature)
    }
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: llm_defaults::MODEL.to_owned(),
            max_tokens: llm_defaults::MAX_TOKENS,
            temperature: llm_defaults::TEMPERATURE,
        }
    }
}

impl From<&OpenAiSettings> for CompletionSettings {
    fn from(settings: &OpenAiSettings) -> Self {
        Self {
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        }
    }
}
