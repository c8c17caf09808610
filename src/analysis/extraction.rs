// ABOUTME: Locates and decodes the JSON payload embedded in a free-text model reply
// ABOUTME: Ordered regex strategies; the first span that decodes wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! JSON payload extraction
//!
//! Model replies often wrap the requested JSON in prose or code fences. A
//! strategy is an ordered list of patterns; each pattern is searched in the
//! trimmed reply and the matched span is decoded. A span that fails to decode
//! moves on to the next pattern. Patterns are greedy, so a span runs from the
//! first opening bracket to the last closing bracket of the same kind.
//!
//! A record-only strategy also rejects decoded values that are not a record
//! or a list of records, such as an array field lifted out of a record.

use food_analysis_core::errors::{AppError, AppResult};
use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// Greedy array span
const ARRAY_PATTERN: &str = r"(?s)\[.*\]";
/// Greedy object span
const OBJECT_PATTERN: &str = r"(?s)\{.*\}";
/// Array-or-object alternation; the leftmost opening bracket decides
const COMBINED_PATTERN: &str = r"(?s)\[.*\]|\{.*\}";

const NOT_A_RECORD: &str = "decoded value is not a record or a list of records";

/// Ordered list of patterns tried against a reply
#[derive(Debug, Clone)]
pub struct ExtractionStrategy {
    patterns: Vec<Regex>,
    records_only: bool,
}

/// Whether `value` is one record or a list of records
fn is_record_payload(value: &Value) -> bool {
    match value {
        Value::Object(_) => true,
        Value::Array(items) => items.iter().all(Value::is_object),
        _ => false,
    }
}

impl ExtractionStrategy {
    /// Compile a strategy from pattern sources
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if a pattern does not compile
    pub fn from_patterns(sources: &[&str]) -> AppResult<Self> {
        let patterns = sources
            .iter()
            .map(|source| {
                Regex::new(source).map_err(|e| {
                    AppError::internal(format!("Invalid extraction pattern {source}: {e}"))
                        .with_source(e)
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            patterns,
            records_only: false,
        })
    }

    /// Only accept spans that decode to a record or a list of records
    #[must_use]
    pub const fn records_only(mut self) -> Self {
        self.records_only = true;
        self
    }

    /// Single alternation pattern, used for text analysis
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the pattern does not compile
    pub fn combined() -> AppResult<Self> {
        Self::from_patterns(&[COMBINED_PATTERN])
    }

    /// Array first, then object, records only; used for image analysis
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if a pattern does not compile
    pub fn array_first() -> AppResult<Self> {
        Ok(Self::from_patterns(&[ARRAY_PATTERN, OBJECT_PATTERN])?.records_only())
    }

    /// Number of patterns in this strategy
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the strategy has no patterns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Extract the first decodable JSON value from `raw`
///
/// # Errors
///
/// Returns `ParseError` with the untrimmed reply in `details.raw` when no
/// pattern yields a span that decodes.
pub fn extract_records(raw: &str, strategy: &ExtractionStrategy) -> AppResult<Value> {
    let content = raw.trim();
    let mut last_failure = None;

    for pattern in &strategy.patterns {
        let Some(span) = pattern.find(content) else {
            continue;
        };

        match serde_json::from_str::<Value>(span.as_str()) {
            Ok(value) if !strategy.records_only || is_record_payload(&value) => {
                return Ok(value);
            }
            Ok(_) => {
                debug!(pattern = %pattern.as_str(), "Matched span is not a nutrition record");
                last_failure = Some(NOT_A_RECORD.to_owned());
            }
            Err(e) => {
                debug!(pattern = %pattern.as_str(), error = %e, "Matched span is not valid JSON");
                last_failure = Some(e.to_string());
            }
        }
    }

    let message = last_failure.map_or_else(
        || "No JSON payload found in model reply".to_owned(),
        |reason| format!("JSON decode failed: {reason}"),
    );
    Err(AppError::parse(message, raw))
}
