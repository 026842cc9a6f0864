mod client;
mod types;

pub use client::{CompletionClient, OpenRouterClient};
pub use types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ResponseMessage};
