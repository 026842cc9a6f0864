use super::types::{
    AskRequest, AskResponse, DebugConfigResponse, ErrorResponse, QuizRequest, QuizResponse,
};
use crate::config::LlmConfig;
use crate::gateway::{CompletionGateway, coerce_num_questions};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<CompletionGateway>,
    pub llm: LlmConfig,
}

/// Every handler failure is reported the same way: HTTP 500 with a JSON
/// `{error}` body, regardless of whether the caller or the provider is at
/// fault.
fn internal_error(err: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!("Received question in topic: {}", request.topic);

    match state
        .gateway
        .answer_question(&request.question, &request.topic)
        .await
    {
        Ok(answer) => Ok(Json(AskResponse { answer })),
        Err(e) => {
            error!("Failed to answer question: {}", e);
            Err(internal_error(e))
        }
    }
}

pub async fn generate_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizRequest>,
) -> Result<Json<QuizResponse>, (StatusCode, Json<ErrorResponse>)> {
    let num_questions = coerce_num_questions(request.num_questions.as_ref()).map_err(|e| {
        error!("Rejected quiz request: {}", e);
        internal_error(e)
    })?;

    info!(
        "Received quiz request: topic={}, num_questions={}",
        request.topic, num_questions
    );

    match state
        .gateway
        .generate_quiz(&request.topic, num_questions)
        .await
    {
        Ok(questions) => Ok(Json(QuizResponse { questions })),
        Err(e) => {
            error!("Failed to generate quiz: {}", e);
            Err(internal_error(e))
        }
    }
}

pub async fn debug_config(State(state): State<AppState>) -> Json<DebugConfigResponse> {
    Json(DebugConfigResponse {
        api_key_present: !state.llm.api_key.is_empty(),
        api_key_preview: redact_key(&state.llm.api_key),
        model: state.llm.model.clone(),
        base_url: state.llm.base_url.clone(),
    })
}

/// First and last four characters of the key, or `None` when the key is
/// absent or too short to redact safely.
fn redact_key(key: &str) -> Option<String> {
    if key.len() < 12 {
        return None;
    }
    // Byte slicing is safe here: credentials are ASCII in practice, and a
    // multi-byte key simply yields no preview.
    let (head, tail) = (key.get(..4)?, key.get(key.len() - 4..)?);
    Some(format!("{head}…{tail}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn redact_hides_the_middle_of_the_key() {
        assert_eq!(
            redact_key("sk-or-v1-abcdef123456").as_deref(),
            Some("sk-o…3456")
        );
    }

    #[test]
    fn redact_refuses_short_or_missing_keys() {
        assert_eq!(redact_key(""), None);
        assert_eq!(redact_key("sk-short"), None);
    }
}
