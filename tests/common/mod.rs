#![allow(dead_code)]

use ai_tutor_rust::config::LlmConfig;
use ai_tutor_rust::gateway::CompletionGateway;
use ai_tutor_rust::llm::OpenRouterClient;
use ai_tutor_rust::server::{self, handlers::AppState};
use axum::Router;
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: "sk-or-v1-test-key-0000".to_string(),
        model: "openai/gpt-3.5-turbo".to_string(),
        timeout_secs: 5,
    }
}

pub fn build_gateway(base_url: &str) -> CompletionGateway {
    let client = OpenRouterClient::new(test_llm_config(base_url));
    CompletionGateway::new(Arc::new(client))
}

pub fn build_app(base_url: &str, static_dir: &str) -> Router {
    let llm = test_llm_config(base_url);
    let state = AppState {
        gateway: Arc::new(build_gateway(base_url)),
        llm,
    };
    server::router(state, static_dir)
}

/// Minimal OpenAI-shaped completion body with the given content.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "gen-test",
        "model": "openai/gpt-3.5-turbo",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ]
    })
}

/// Mounts a provider mock answering every completion call with `content`.
pub async fn mock_completion(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .mount(server)
        .await;
}

/// The JSON bodies of the completion requests the mock provider received.
pub async fn recorded_payloads(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}
