// ABOUTME: OpenAI chat-completions provider used for food text and image analysis
// ABOUTME: Serializes multimodal messages and maps API failures onto ErrorCode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `OpenAI` Provider
//!
//! Non-streaming client for the `/chat/completions` endpoint. Images travel
//! inline as `image_url` parts whose URL is a `data:` URL, so no separate upload
//! step is needed.

use async_trait::async_trait;
use food_analysis_core::errors::{AppError, AppResult, ErrorCode};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

use super::{
    ChatMessage, ChatRequest, ChatResponse, ContentPart, LlmProvider, MessageContent, TokenUsage,
};
use crate::config::OpenAiSettings;

/// Service label used in error messages
const SERVICE_NAME: &str = "OpenAI";

/// Error type/code `OpenAI` uses for exhausted billing quota
const INSUFFICIENT_QUOTA: &str = "insufficient_quota";

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: &'static str,
    content: OpenAiContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum OpenAiContent {
    Text(String),
    Parts(Vec<OpenAiContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OpenAiContentPart {
    Text { text: String },
    ImageUrl { image_url: OpenAiImageUrl },
}

#[derive(Debug, Serialize)]
struct OpenAiImageUrl {
    url: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        let content = match &msg.content {
            MessageContent::Text(text) => OpenAiContent::Text(text.clone()),
            MessageContent::Parts(parts) => OpenAiContent::Parts(
                parts
                    .iter()
                    .map(|part| match part {
                        ContentPart::Text(text) => OpenAiContentPart::Text { text: text.clone() },
                        ContentPart::ImageUrl(url) => OpenAiContentPart::ImageUrl {
                            image_url: OpenAiImageUrl { url: url.clone() },
                        },
                    })
                    .collect(),
            ),
        };

        Self {
            role: msg.role.as_str(),
            content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<String>,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// `OpenAI` chat-completions provider
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    default_model: String,
}

impl OpenAiProvider {
    /// Create a provider with an explicit credential and endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        default_model: impl Into<String>,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
            default_model: default_model.into(),
        })
    }

    /// Create a provider from settings; `None` when no credential is configured
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_settings(settings: &OpenAiSettings) -> AppResult<Option<Self>> {
        settings
            .api_key
            .as_ref()
            .map(|key| Self::new(key.clone(), settings.base_url.clone(), settings.model.clone()))
            .transpose()
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    fn build_request(&self, request: &ChatRequest) -> OpenAiRequest {
        OpenAiRequest {
            model: request
                .model
                .clone()
                .unwrap_or_else(|| self.default_model.clone()),
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        }
    }

    /// Map an unsuccessful HTTP response onto an `AppError`
    fn parse_error_response(status: StatusCode, body: &str) -> AppError {
        let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body) else {
            return if status == StatusCode::TOO_MANY_REQUESTS {
                AppError::new(
                    ErrorCode::ExternalRateLimited,
                    format!("{SERVICE_NAME} rate limit reached ({status})"),
                )
            } else {
                AppError::external_service(
                    SERVICE_NAME,
                    format!(
                        "API error ({status}): {}",
                        body.chars().take(200).collect::<String>()
                    ),
                )
            };
        };

        let detail = error_response.error;
        let is_quota = [detail.error_type.as_deref(), detail.code.as_deref()]
            .into_iter()
            .flatten()
            .any(|kind| kind == INSUFFICIENT_QUOTA);

        if is_quota {
            return AppError::quota_exceeded(format!(
                "{SERVICE_NAME} quota exceeded ({status}): {}",
                detail.message
            ));
        }

        match status {
            StatusCode::TOO_MANY_REQUESTS => AppError::new(
                ErrorCode::ExternalRateLimited,
                format!("{SERVICE_NAME} rate limit reached ({status}): {}", detail.message),
            ),
            StatusCode::UNAUTHORIZED => AppError::new(
                ErrorCode::ExternalAuthFailed,
                format!("{SERVICE_NAME} authentication failed: {}", detail.message),
            ),
            _ => AppError::external_service(
                SERVICE_NAME,
                format!(
                    "{} ({status}) - {}",
                    detail.error_type.as_deref().unwrap_or("unknown"),
                    detail.message
                ),
            ),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let openai_request = self.build_request(request);

        debug!(
            "Sending chat completion request with {} messages, {} images",
            request.messages.len(),
            request
                .messages
                .iter()
                .map(|m| m.content.image_count())
                .sum::<usize>()
        );

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to {}: {}", SERVICE_NAME, e);
                AppError::external_service(SERVICE_NAME, format!("Failed to connect: {e}"))
                    .with_source(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read API response: {}", e);
            AppError::external_service(SERVICE_NAME, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            let error = Self::parse_error_response(status, &body);
            warn!(code = ?error.code, "{} call failed: {}", SERVICE_NAME, error.message);
            return Err(error);
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse API response: {}", e);
            AppError::external_service(SERVICE_NAME, format!("Failed to parse response: {e}"))
        })?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE_NAME, "API returned no choices"))?;

        let content = choice.message.content.unwrap_or_default();

        debug!(
            "Received response: {} chars, finish_reason: {:?}",
            content.len(),
            choice.finish_reason
        );

        Ok(ChatResponse {
            content,
            model: openai_response.model,
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}
