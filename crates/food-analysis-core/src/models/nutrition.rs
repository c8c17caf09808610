// ABOUTME: Nutrition record model produced by food text and image analysis
// ABOUTME: NutritionRecord and the closed FoodCategory cuisine enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Cuisine classification of a food item
///
/// The six named cuisines form a closed set; anything else collapses to
/// [`FoodCategory::Other`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FoodCategory {
    /// Korean cuisine
    #[serde(rename = "한식")]
    Korean,
    /// Chinese cuisine
    #[serde(rename = "중식")]
    Chinese,
    /// Japanese cuisine
    #[serde(rename = "일식")]
    Japanese,
    /// Western cuisine
    #[serde(rename = "양식")]
    Western,
    /// Korean street food and snacks
    #[serde(rename = "분식")]
    Bunsik,
    /// Beverages
    #[serde(rename = "음료")]
    Beverage,
    /// Fallback for anything outside the set
    #[serde(rename = "기타")]
    Other,
}

impl FoodCategory {
    /// Categories the model is allowed to return
    pub const KNOWN: [Self; 6] = [
        Self::Korean,
        Self::Chinese,
        Self::Japanese,
        Self::Western,
        Self::Bunsik,
        Self::Beverage,
    ];

    /// Label used on the wire and in prompts
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Korean => "한식",
            Self::Chinese => "중식",
            Self::Japanese => "일식",
            Self::Western => "양식",
            Self::Bunsik => "분식",
            Self::Beverage => "음료",
            Self::Other => "기타",
        }
    }

    /// Match a label against the known set exactly
    ///
    /// The fallback label itself is not part of the known set.
    #[must_use]
    pub fn from_known_label(label: &str) -> Option<Self> {
        Self::KNOWN.into_iter().find(|c| c.as_str() == label)
    }

    /// Parse a label, falling back to [`FoodCategory::Other`]
    #[must_use]
    pub fn from_label_lossy(label: &str) -> Self {
        Self::from_known_label(label).unwrap_or(Self::Other)
    }

    /// Known labels joined with `/`, as they appear in prompts
    #[must_use]
    pub fn prompt_choices() -> String {
        Self::KNOWN
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Nutrition facts for one distinct food item
///
/// Identical items are merged into one record: `quantity` counts them and every
/// nutrition field is already multiplied by that count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionRecord {
    /// Food name (Korean)
    pub food_name: String,
    /// Number of identical items merged into this record
    pub quantity: u32,
    /// Energy in kilocalories
    pub calories: f64,
    /// Carbohydrate in grams
    pub carbohydrate: f64,
    /// Protein in grams
    pub protein: f64,
    /// Fat in grams
    pub fat: f64,
    /// Sodium
    pub sodium: f64,
    /// Fiber in grams
    pub fiber: f64,
    /// Total amount in grams
    pub total_amount: f64,
    /// Cuisine classification
    pub food_category: FoodCategory,
}

impl NutritionRecord {
    /// Stand-in record returned when the upstream quota is exhausted
    #[must_use]
    pub fn quota_placeholder() -> Self {
        Self {
            food_name: "음식 (할당량 초과)".to_owned(),
            quantity: 1,
            calories: 300.0,
            carbohydrate: 20.0,
            protein: 15.0,
            fat: 10.0,
            sodium: 2.0,
            fiber: 3.0,
            total_amount: 300.0,
            food_category: FoodCategory::Other,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_round_trip() {
        for category in FoodCategory::KNOWN {
            assert_eq!(FoodCategory::from_known_label(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_fallback_label_is_not_known() {
        assert_eq!(FoodCategory::from_known_label("기타"), None);
        assert_eq!(FoodCategory::from_label_lossy("프랑스식"), FoodCategory::Other);
    }

    #[test]
    fn test_prompt_choices() {
        assert_eq!(FoodCategory::prompt_choices(), "한식/중식/일식/양식/분식/음료");
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let value = serde_json::to_value(NutritionRecord::quota_placeholder()).unwrap();

        assert_eq!(value["foodName"], "음식 (할당량 초과)");
        assert_eq!(value["quantity"], 1);
        assert_eq!(value["totalAmount"], 300.0);
        assert_eq!(value["foodCategory"], "기타");
    }
}
