use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A media type entry of a request body or response. The schema is opaque.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

impl MediaType {
    pub fn example_text(&self) -> Option<String> {
        self.example.as_ref().map(format_example)
    }
}

/// Render an example value for display: structured values as indented JSON,
/// scalars as their plain text.
pub fn format_example(example: &Value) -> String {
    match example {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(example).unwrap_or_else(|_| example.to_string())
        }
        other => other.to_string(),
    }
}
