// ABOUTME: Prompt construction for food text and food image analysis requests
// ABOUTME: States the JSON schema, merge-duplicates rule, Korean output, and category set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Prompt builder
//!
//! Both prompts carry the same contract: reply with JSON only, one object for
//! a single food or an array for several, Korean text values, and a category
//! drawn from the closed cuisine set. Identical foods are merged by the model
//! with `quantity` set to the count and nutrition values multiplied.

use food_analysis_core::errors::{AppError, AppResult};
use food_analysis_core::models::FoodCategory;

use super::validation::EncodedImage;
use super::CompletionSettings;
use crate::llm::{ChatMessage, ChatRequest, ContentPart};

/// One record of the reply schema, indented by `indent` spaces
fn record_schema(name_hint: &str, quantity_hint: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let fields = [
        format!("\"foodName\": \"{name_hint}\""),
        format!("\"quantity\": {quantity_hint}"),
        "\"calories\": 숫자값".to_owned(),
        "\"carbohydrate\": 숫자값".to_owned(),
        "\"protein\": 숫자값".to_owned(),
        "\"fat\": 숫자값".to_owned(),
        "\"sodium\": 숫자값".to_owned(),
        "\"fiber\": 숫자값".to_owned(),
        "\"totalAmount\": 숫자값".to_owned(),
        format!(
            "\"foodCategory\": \"{} 중 하나\"",
            FoodCategory::prompt_choices()
        ),
    ];

    let body = fields
        .iter()
        .map(|field| format!("{pad}    {field}"))
        .collect::<Vec<_>>()
        .join(",\n");

    format!("{pad}{{\n{body}\n{pad}}}")
}

/// Prompt text for a typed food name or description
#[must_use]
pub fn text_prompt(food_text: &str) -> String {
    format!(
        r"
You are a food analysis expert. 아래의 음식(또는 음식 설명)을 분석하여 영양성분 정보를 제공하세요.

음식: {food_text}

아래 JSON 형식으로만 응답하세요.
단일 음식이면 객체, 여러 음식이면 배열로 반환하세요.

{schema}

⚠ IMPORTANT:
1. 반드시 유효한 JSON만 반환하세요. 설명, 텍스트 추가 금지.
2. 모든 값은 한국어로.
3. 같은 음식이 여러 번 언급되면 하나로 합쳐서 quantity에 총 개수를 표시하고 영양성분을 곱하세요.
4. quantity 필드는 해당 음식의 총 개수를 나타내야 합니다.
",
        schema = record_schema("음식 이름", "숫자값", 0),
    )
}

/// Instruction text accompanying an uploaded food photo
#[must_use]
pub fn image_prompt() -> String {
    format!(
        r"
You are a food image analysis expert with deep knowledge in culinary arts.
Analyze the food image below carefully, considering its appearance, ingredients, and regional characteristics.

IMPORTANT: Analyze ALL foods visible in the image. If the same food appears multiple times, combine them into one entry with the total quantity and multiplied nutritional values.

Provide the analysis in JSON format with the following structure:

For single food:
{single}

For multiple foods (2 or more):
[
{first},
{second}
]

⚠ IMPORTANT:
1. Return ONLY valid JSON format
2. All numeric values should be numbers (not strings)
3. All text values should be in Korean
4. Do not include any additional text or explanations
5. Make sure all quotes are properly escaped
6. If there's only one food, return a single object. If there are multiple foods, return an array of objects.
7. Include ALL foods visible in the image, even if there are many
8. If the same food appears multiple times, combine them into one entry with the total quantity and multiply the nutritional values by the number of items
9. Each unique food should be analyzed separately with its own nutritional values
10. The quantity field should represent the total number of that specific food item
",
        single = record_schema("음식 이름", "1", 0),
        first = record_schema("음식 이름 1", "숫자값", 4),
        second = record_schema("음식 이름 2", "숫자값", 4),
    )
}

/// Build the completion request for the text endpoint
///
/// # Errors
///
/// Returns `MissingInput` when `food_text` is empty; no request is built.
pub fn text_analysis_request(
    food_text: &str,
    settings: &CompletionSettings,
) -> AppResult<ChatRequest> {
    if food_text.is_empty() {
        return Err(AppError::missing_input("Please enter a food name"));
    }

    Ok(settings.apply(ChatRequest::new(vec![ChatMessage::user(text_prompt(
        food_text,
    ))])))
}

/// Build the multimodal completion request for the image endpoint
#[must_use]
pub fn image_analysis_request(image: &EncodedImage, settings: &CompletionSettings) -> ChatRequest {
    settings.apply(ChatRequest::new(vec![ChatMessage::user_parts(vec![
        ContentPart::Text(image_prompt()),
        ContentPart::ImageUrl(image.data_url()),
    ])]))
}
