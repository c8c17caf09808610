// ABOUTME: Uploaded image validation and base64 encoding for the image endpoint
// ABOUTME: Checks content type, extension, and size in a fixed order before encoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use food_analysis_core::errors::{AppError, AppResult};

use crate::constants::uploads;

/// An uploaded file as received from the multipart form
#[derive(Debug, Clone, Default)]
pub struct ImageUpload {
    /// Client-supplied filename
    pub filename: Option<String>,
    /// Declared content type
    pub content_type: Option<String>,
    /// File contents
    pub bytes: Vec<u8>,
}

/// Validated image ready to embed in a model request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Content type exactly as declared by the client
    pub media_type: String,
    /// Standard base64 of the file bytes
    pub base64: String,
}

impl EncodedImage {
    /// `data:` URL form used in multimodal messages
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.base64)
    }
}

/// Lowercased extension of `filename`, without the dot
///
/// Dotfiles such as `.png` have no extension.
fn lowercase_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Validate an upload and encode it
///
/// Checks run in this order and the first failure wins:
/// content type, extension, emptiness, size.
///
/// # Errors
///
/// - `FileValidation` for a non-image content type or a disallowed extension
/// - `Encoding` for an empty file or one above the size limit
pub fn validate_upload(upload: &ImageUpload) -> AppResult<EncodedImage> {
    let content_type = upload
        .content_type
        .as_deref()
        .filter(|ct| ct.starts_with(uploads::IMAGE_CONTENT_TYPE_PREFIX))
        .ok_or_else(|| AppError::file_validation("Only image files can be uploaded"))?;

    let filename = upload.filename.as_deref().unwrap_or_default();
    let extension_allowed = lowercase_extension(filename)
        .is_some_and(|ext| uploads::ALLOWED_EXTENSIONS.contains(&ext.as_str()));
    if !extension_allowed {
        return Err(AppError::file_validation(format!(
            "Unsupported file format. Allowed formats: {}",
            uploads::ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }

    if upload.bytes.is_empty() {
        return Err(AppError::encoding("The uploaded file is empty"));
    }

    if upload.bytes.len() > uploads::MAX_IMAGE_BYTES {
        return Err(AppError::encoding(format!(
            "File too large ({} bytes). Maximum size is 10MB",
            upload.bytes.len()
        )));
    }

    Ok(EncodedImage {
        media_type: content_type.to_owned(),
        base64: general_purpose::STANDARD.encode(&upload.bytes),
    })
}
