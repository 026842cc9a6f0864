use crate::gateway::QuizQuestion;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_topic() -> String {
    "General".to_string()
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default = "default_topic")]
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default = "default_topic")]
    pub topic: String,
    /// Kept as raw JSON: the field accepts an integer or a numeric string
    /// and is coerced in the handler.
    #[serde(default)]
    pub num_questions: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Read-only diagnostics: reports whether the provider credential is set
/// and a redacted preview, never the full value.
#[derive(Debug, Serialize)]
pub struct DebugConfigResponse {
    pub api_key_present: bool,
    pub api_key_preview: Option<String>,
    pub model: String,
    pub base_url: String,
}
