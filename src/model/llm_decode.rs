use serde_json::Value;

use crate::error::TurnError;

/// Pull `generated_text` out of the first element of an inference response.
pub fn decode_generated_text(body: &str) -> Result<String, TurnError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        log::debug!("[llm] Response body is not JSON: {}", e);
        TurnError::ParseFailure
    })?;

    let Value::Array(items) = value else {
        return Err(TurnError::ParseFailure);
    };

    items
        .first()
        .and_then(|item| item.get("generated_text"))
        .and_then(|text| text.as_str())
        .map(str::to_string)
        .ok_or(TurnError::ParseFailure)
}
