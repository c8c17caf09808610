// ABOUTME: Orchestrates text and image food analysis against the model provider
// ABOUTME: Validates input, calls the model once, extracts and normalizes records, builds envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use food_analysis_core::errors::{AppError, AppResult, ErrorCode};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::extraction::{extract_records, ExtractionStrategy};
use super::normalize::normalize_categories;
use super::prompts::{image_analysis_request, text_analysis_request};
use super::response::{AnalysisResponse, AnalysisRoute};
use super::validation::{validate_upload, ImageUpload};
use super::CompletionSettings;
use crate::config::ServerConfig;
use crate::constants::env_vars;
use crate::llm::{ChatRequest, LlmProvider, OpenAiProvider};

/// Food analysis service shared by all request handlers
///
/// Holds no per-request state; one instance serves every request concurrently.
pub struct FoodAnalyzer {
    provider: Option<Arc<dyn LlmProvider>>,
    settings: CompletionSettings,
    text_strategy: ExtractionStrategy,
    image_strategy: ExtractionStrategy,
}

impl FoodAnalyzer {
    /// Create an analyzer; `provider` is `None` when no credential is configured
    ///
    /// # Errors
    ///
    /// Returns an error if the extraction patterns fail to compile
    pub fn new(
        provider: Option<Arc<dyn LlmProvider>>,
        settings: CompletionSettings,
    ) -> AppResult<Self> {
        Ok(Self {
            provider,
            settings,
            text_strategy: ExtractionStrategy::combined()?,
            image_strategy: ExtractionStrategy::array_first()?,
        })
    }

    /// Create an analyzer backed by `OpenAI` from server configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or extraction patterns cannot be built
    pub fn from_config(config: &ServerConfig) -> AppResult<Self> {
        let provider = OpenAiProvider::from_settings(&config.openai)?
            .map(|provider| Arc::new(provider) as Arc<dyn LlmProvider>);

        Self::new(provider, CompletionSettings::from(&config.openai))
    }

    /// Whether a model provider is configured
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Model identifier sent with every request
    #[must_use]
    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn provider(&self) -> AppResult<&dyn LlmProvider> {
        self.provider.as_deref().ok_or_else(|| {
            AppError::config_missing(format!(
                "{} environment variable is not set",
                env_vars::OPENAI_API_KEY
            ))
        })
    }

    /// Single model call returning the raw reply text
    async fn complete(&self, request: &ChatRequest) -> AppResult<String> {
        let provider = self.provider()?;
        let response = provider.complete(request).await?;
        debug!(
            provider = provider.name(),
            model = %response.model,
            reply = %response.content,
            "Model reply received"
        );
        Ok(response.content)
    }

    // ========================================================================
    // Text analysis
    // ========================================================================

    /// Analyze a food name or free-text description
    ///
    /// A missing or empty name is rejected before the configuration check and
    /// without calling the model.
    #[instrument(skip(self, food_name), fields(route = "text"))]
    pub async fn analyze_text(&self, food_name: Option<&str>) -> AnalysisResponse {
        match self.run_text_analysis(food_name.unwrap_or_default()).await {
            Ok(records) => {
                info!("Text analysis succeeded");
                AnalysisResponse::text_success(records)
            }
            Err(error) => {
                warn!(code = ?error.code, "Text analysis failed: {}", error.message);
                AnalysisResponse::failure(AnalysisRoute::Text, &error)
            }
        }
    }

    async fn run_text_analysis(&self, food_name: &str) -> AppResult<Value> {
        let request = text_analysis_request(food_name, &self.settings)?;
        let reply = self.complete(&request).await?;
        extract_records(&reply, &self.text_strategy)
    }

    // ========================================================================
    // Image analysis
    // ========================================================================

    /// Analyze an uploaded food photo
    ///
    /// `upload` is the outcome of reading the multipart form. Quota and rate
    /// refusals from the model service produce a placeholder record instead
    /// of a failure.
    #[instrument(skip(self, upload), fields(route = "image"))]
    pub async fn analyze_image(&self, upload: AppResult<ImageUpload>) -> AnalysisResponse {
        match self.run_image_analysis(upload).await {
            Ok(response) => response,
            Err(error) => {
                warn!(code = ?error.code, "Image analysis failed: {}", error.message);
                let response = AnalysisResponse::failure(AnalysisRoute::Image, &error);
                if error.code == ErrorCode::ParseError {
                    response.with_model(&self.settings.model)
                } else {
                    response
                }
            }
        }
    }

    async fn run_image_analysis(
        &self,
        upload: AppResult<ImageUpload>,
    ) -> AppResult<AnalysisResponse> {
        self.provider()?;

        let upload = upload?;
        let image = validate_upload(&upload)?;
        info!(
            filename = upload.filename.as_deref().unwrap_or_default(),
            media_type = %image.media_type,
            bytes = upload.bytes.len(),
            "Image upload accepted"
        );

        let request = image_analysis_request(&image, &self.settings);
        let reply = match self.complete(&request).await {
            Ok(reply) => reply,
            Err(error) if error.code.is_quota_related() => {
                warn!(code = ?error.code, "Model quota exhausted, returning placeholder record");
                return AnalysisResponse::quota_placeholder();
            }
            Err(error) => return Err(error),
        };

        let mut records = extract_records(&reply, &self.image_strategy)?;
        normalize_categories(&mut records);

        info!("Image analysis succeeded");
        Ok(AnalysisResponse::image_success(
            records,
            &self.settings.model,
            upload.filename,
        ))
    }
}
