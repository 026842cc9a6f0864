use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// The single outbound capability: send an ordered message list, receive the
/// completion text. Tests substitute a fake implementation.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String>;
}

/// Chat-completion client for OpenRouter (or any OpenAI-compatible
/// endpoint). One synchronous round-trip per call; no retries or caching.
pub struct OpenRouterClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(config: LlmConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            model: config.model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        debug!(
            "Creating chat completion with {} messages for model {}",
            messages.len(),
            self.model
        );

        let payload = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::upstream(status.as_u16(), body));
        }

        let completion: ChatCompletionResponse = response.json().await?;

        debug!(
            "Received chat completion response with {} choices",
            completion.choices.len()
        );

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::internal("provider returned no choices"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LlmConfig;
    use pretty_assertions::assert_eq;

    fn create_test_config() -> LlmConfig {
        LlmConfig {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            api_key: "test-api-key".to_string(),
            model: "openai/gpt-3.5-turbo".to_string(),
            timeout_secs: 30,
        }
    }

    #[test]
    fn test_client_endpoint_joins_path() {
        let client = OpenRouterClient::new(create_test_config());
        assert_eq!(
            client.endpoint(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    #[test]
    fn test_client_strips_trailing_slash_from_base_url() {
        let mut config = create_test_config();
        config.base_url = "http://localhost:9000/api/".to_string();

        let client = OpenRouterClient::new(config);
        assert_eq!(client.endpoint(), "http://localhost:9000/api/chat/completions");
    }

    #[test]
    fn test_client_keeps_configured_model() {
        let client = OpenRouterClient::new(create_test_config());
        assert_eq!(client.model, "openai/gpt-3.5-turbo");
    }
}
