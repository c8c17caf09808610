// ABOUTME: Food analysis HTTP endpoints for text descriptions and uploaded photos
// ABOUTME: Thin handlers that decode the request and delegate to FoodAnalyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food analysis routes
//!
//! Every outcome is answered with HTTP 200 and an [`AnalysisResponse`]
//! envelope; malformed bodies are reported through the envelope as well.

use std::sync::Arc;

use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        rejection::JsonRejection,
        DefaultBodyLimit, State,
    },
    routing::post,
    Json, Router,
};
use food_analysis_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::analysis::{AnalysisResponse, AnalysisRoute, FoodAnalyzer, ImageUpload};
use crate::constants::uploads;

/// Body of `POST /api/food/analyze/text`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextAnalysisRequest {
    /// Food name or free-text description; scalars are accepted as text
    #[serde(default)]
    pub food_name: Option<Value>,
}

impl TextAnalysisRequest {
    /// Food text to analyze, or `None` when absent or empty
    ///
    /// Numbers and `true` are rendered as text. `null`, `false`, zero, the
    /// empty string, and empty collections count as missing.
    #[must_use]
    pub fn food_text(&self) -> Option<String> {
        match self.food_name.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(text) => Some(text.clone()).filter(|text| !text.is_empty()),
            Value::Number(number) => Some(number.to_string())
                .filter(|_| number.as_f64().is_some_and(|value| value.abs() > 0.0)),
            Value::Array(items) if items.is_empty() => None,
            Value::Object(fields) if fields.is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

/// Food analysis routes
pub struct FoodRoutes;

impl FoodRoutes {
    /// Create the food analysis routes
    pub fn routes(analyzer: Arc<FoodAnalyzer>) -> Router {
        Router::new()
            .route("/api/food/analyze/text", post(Self::analyze_text))
            .route("/api/food/analyze", post(Self::analyze_image))
            .layer(DefaultBodyLimit::max(uploads::MAX_REQUEST_BODY_BYTES))
            .with_state(analyzer)
    }

    async fn analyze_text(
        State(analyzer): State<Arc<FoodAnalyzer>>,
        body: Result<Json<TextAnalysisRequest>, JsonRejection>,
    ) -> Json<AnalysisResponse> {
        let request = match body {
            Ok(Json(request)) => request,
            Err(rejection) => {
                warn!("Rejected text analysis body: {}", rejection.body_text());
                let error = AppError::invalid_input(rejection.body_text());
                return Json(AnalysisResponse::failure(AnalysisRoute::Text, &error));
            }
        };

        Json(analyzer.analyze_text(request.food_text().as_deref()).await)
    }

    async fn analyze_image(
        State(analyzer): State<Arc<FoodAnalyzer>>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Json<AnalysisResponse> {
        let upload = match multipart {
            Ok(multipart) => read_image_upload(multipart).await,
            Err(rejection) => {
                warn!("Rejected image analysis body: {}", rejection.body_text());
                Err(AppError::missing_input("No file uploaded"))
            }
        };

        Json(analyzer.analyze_image(upload).await)
    }
}

/// Collect the `file` field of a multipart form
///
/// # Errors
///
/// - `MissingInput` when the form has no `file` field
/// - `Encoding` when the form or the file cannot be read
pub async fn read_image_upload(mut multipart: Multipart) -> AppResult<ImageUpload> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Multipart parsing error: {}", e);
        AppError::encoding(format!("Failed to read uploaded form: {e}"))
    })? {
        if field.name() != Some(uploads::FILE_FIELD_NAME) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        let filename = field.file_name().map(ToOwned::to_owned);
        let content_type = field.content_type().map(ToOwned::to_owned);
        let bytes = field.bytes().await.map_err(|e| {
            warn!("Failed to read uploaded file: {}", e);
            AppError::encoding(format!("Failed to read uploaded file: {e}"))
        })?;

        return Ok(ImageUpload {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Err(AppError::missing_input("No file uploaded"))
}
