// ABOUTME: Uniform response envelope for the food analysis endpoints
// ABOUTME: Maps every success and every AppError onto a success flag and a type tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use food_analysis_core::errors::{AppError, ErrorCode};
use food_analysis_core::models::NutritionRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Note attached to the quota placeholder envelope
pub const QUOTA_NOTE: &str = "OpenAI API quota exceeded; returning default values";

/// Classification tag carried in every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    /// Text endpoint outcome, including a missing food name
    TextAnalysis,
    /// Image endpoint success
    ImageAnalysis,
    /// Model credential not configured
    ConfigError,
    /// Upload content type or extension rejected
    FileValidationError,
    /// Upload empty, oversized, or unreadable
    EncodingError,
    /// Model reply had no decodable JSON
    ParseError,
    /// Model call failed
    #[serde(rename = "openai_api_error")]
    OpenAiApiError,
    /// Upstream quota exhausted; result is a placeholder
    QuotaExceeded,
    /// Anything else
    GeneralError,
}

/// Which endpoint produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisRoute {
    /// `POST /api/food/analyze/text`
    Text,
    /// `POST /api/food/analyze`
    Image,
}

impl AnalysisType {
    /// Tag for a failure on `route`
    #[must_use]
    pub const fn for_error(route: AnalysisRoute, code: ErrorCode) -> Self {
        match code {
            ErrorCode::MissingInput => match route {
                AnalysisRoute::Text => Self::TextAnalysis,
                AnalysisRoute::Image => Self::FileValidationError,
            },
            ErrorCode::FileValidation => Self::FileValidationError,
            ErrorCode::Encoding => Self::EncodingError,
            ErrorCode::ConfigMissing => Self::ConfigError,
            ErrorCode::ParseError => Self::ParseError,
            ErrorCode::ExternalServiceError
            | ErrorCode::ExternalAuthFailed
            | ErrorCode::ExternalRateLimited
            | ErrorCode::QuotaExceeded => Self::OpenAiApiError,
            ErrorCode::InvalidInput | ErrorCode::InternalError => Self::GeneralError,
        }
    }
}

/// JSON envelope returned with HTTP 200 for every outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Whether analysis produced a usable result
    pub success: bool,
    /// Nutrition record(s) on success; the raw reply on a parse failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Human-readable failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Outcome classification
    #[serde(rename = "type")]
    pub kind: AnalysisType,
    /// Model identifier used (image endpoint)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Original upload filename (image endpoint success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Extra explanation, set on the quota placeholder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AnalysisResponse {
    const fn empty(success: bool, kind: AnalysisType) -> Self {
        Self {
            success,
            result: None,
            error: None,
            kind,
            model: None,
            filename: None,
            note: None,
        }
    }

    /// Successful text analysis
    #[must_use]
    pub fn text_success(result: Value) -> Self {
        Self {
            result: Some(result),
            ..Self::empty(true, AnalysisType::TextAnalysis)
        }
    }

    /// Successful image analysis
    #[must_use]
    pub fn image_success(result: Value, model: &str, filename: Option<String>) -> Self {
        Self {
            result: Some(result),
            model: Some(model.to_owned()),
            filename,
            ..Self::empty(true, AnalysisType::ImageAnalysis)
        }
    }

    /// Placeholder record returned when the upstream quota is exhausted
    ///
    /// # Errors
    ///
    /// Returns an error if the placeholder record cannot be serialized
    pub fn quota_placeholder() -> Result<Self, AppError> {
        Ok(Self {
            result: Some(serde_json::to_value(NutritionRecord::quota_placeholder())?),
            note: Some(QUOTA_NOTE.to_owned()),
            ..Self::empty(true, AnalysisType::QuotaExceeded)
        })
    }

    /// Failure envelope for `error` on `route`
    ///
    /// Parse failures carry the raw model reply in `result`.
    #[must_use]
    pub fn failure(route: AnalysisRoute, error: &AppError) -> Self {
        Self {
            result: error.raw_reply().map(|raw| Value::String(raw.to_owned())),
            error: Some(error.to_string()),
            ..Self::empty(false, AnalysisType::for_error(route, error.code))
        }
    }

    /// Attach the model identifier
    #[must_use]
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = Some(model.to_owned());
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_input_tag_depends_on_route() {
        assert_eq!(
            AnalysisType::for_error(AnalysisRoute::Text, ErrorCode::MissingInput),
            AnalysisType::TextAnalysis
        );
        assert_eq!(
            AnalysisType::for_error(AnalysisRoute::Image, ErrorCode::MissingInput),
            AnalysisType::FileValidationError
        );
    }

    #[test]
    fn test_type_tags_on_the_wire() {
        let tags = serde_json::to_value([
            AnalysisType::ConfigError,
            AnalysisType::OpenAiApiError,
            AnalysisType::QuotaExceeded,
            AnalysisType::GeneralError,
        ])
        .unwrap();

        assert_eq!(
            tags,
            json!(["config_error", "openai_api_error", "quota_exceeded", "general_error"])
        );
    }

    #[test]
    fn test_failure_envelope_omits_absent_fields() {
        let response = AnalysisResponse::failure(
            AnalysisRoute::Text,
            &AppError::config_missing("OPENAI_API_KEY is not set"),
        );
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["type"], "config_error");
        assert!(body.get("result").is_none());
        assert!(body.get("model").is_none());
        assert!(body["error"].as_str().unwrap().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_parse_failure_keeps_raw_reply() {
        let raw = "no json here";
        let response =
            AnalysisResponse::failure(AnalysisRoute::Image, &AppError::parse("nothing", raw))
                .with_model("gpt-4o");

        assert_eq!(response.kind, AnalysisType::ParseError);
        assert_eq!(response.result, Some(json!(raw)));
        assert_eq!(response.model.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn test_quota_placeholder_values() {
        let response = AnalysisResponse::quota_placeholder().unwrap();
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(body["success"], true);
        assert_eq!(body["type"], "quota_exceeded");
        assert_eq!(body["result"]["foodName"], "음식 (할당량 초과)");
        assert_eq!(body["result"]["foodCategory"], "기타");
        assert_eq!(body["result"]["calories"].as_f64(), Some(300.0));
        assert_eq!(body["note"], QUOTA_NOTE);
    }
}
