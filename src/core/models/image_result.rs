use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResult {
    pub link: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "displayLink", default)]
    pub display_link: String,
}

/// Body of an image search response. The API reports failures either as a
/// plain string or as an object, so `error` is kept as raw JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Option<Vec<ImageResult>>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl SearchResponse {
    pub fn api_error(&self) -> Option<String> {
        let error = self.error.as_ref()?;

        if !is_truthy(error) {
            return None;
        }

        let description = match error {
            Value::String(message) => message.clone(),
            Value::Object(fields) => fields
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string()),
            other => other.to_string(),
        };

        Some(description)
    }

    pub fn into_items(self) -> Vec<ImageResult> {
        self.items.unwrap_or_default()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
