// ABOUTME: Category normalization for decoded nutrition payloads
// ABOUTME: Forces every record's foodCategory into the closed cuisine set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use food_analysis_core::models::FoodCategory;
use serde_json::Value;

const CATEGORY_FIELD: &str = "foodCategory";

/// Normalize the category of one record in place
///
/// Missing, non-string, and unknown categories become `기타`. Extraction only
/// hands over records, but non-object values are left alone.
fn normalize_record(record: &mut Value) {
    let Some(fields) = record.as_object_mut() else {
        return;
    };

    let category = fields
        .get(CATEGORY_FIELD)
        .and_then(Value::as_str)
        .map_or(FoodCategory::Other, FoodCategory::from_label_lossy);

    fields.insert(
        CATEGORY_FIELD.to_owned(),
        Value::String(category.as_str().to_owned()),
    );
}

/// Normalize categories of a single record or of every record in an array
pub fn normalize_categories(payload: &mut Value) {
    match payload {
        Value::Array(records) => records.iter_mut().for_each(normalize_record),
        record @ Value::Object(_) => normalize_record(record),
        _ => {}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_category_becomes_other() {
        let mut payload = json!({"foodName": "라따뚜이", "foodCategory": "프랑스식"});
        normalize_categories(&mut payload);
        assert_eq!(payload["foodCategory"], "기타");
    }

    #[test]
    fn test_missing_and_non_string_categories() {
        let mut payload = json!([
            {"foodName": "김밥"},
            {"foodName": "콜라", "foodCategory": 3},
            {"foodName": "짜장면", "foodCategory": "중식"}
        ]);
        normalize_categories(&mut payload);

        assert_eq!(payload[0]["foodCategory"], "기타");
        assert_eq!(payload[1]["foodCategory"], "기타");
        assert_eq!(payload[2]["foodCategory"], "중식");
    }

    #[test]
    fn test_other_fields_untouched() {
        let mut payload = json!({"foodName": "초밥", "quantity": 2, "calories": 600, "foodCategory": "일식"});
        let expected = payload.clone();
        normalize_categories(&mut payload);
        assert_eq!(payload, expected);
    }

    #[test]
    fn test_scalars_are_ignored() {
        let mut payload = json!(["생강", 1]);
        normalize_categories(&mut payload);
        assert_eq!(payload, json!(["생강", 1]));
    }
}
