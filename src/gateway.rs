use crate::llm::{ChatMessage, CompletionClient};
use crate::{Error, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// A single quiz question as produced by the model. Expected shape is
/// `{question, options: [4 strings], correctAnswer}`, but elements are
/// passed through exactly as decoded: the backend does not check that all
/// fields are present or that `correctAnswer` is one of `options`.
pub type QuizQuestion = Value;

/// Builds chat-completion payloads, performs the single upstream call, and
/// post-processes the completion text. Stateless per request.
pub struct CompletionGateway {
    client: Arc<dyn CompletionClient>,
}

impl CompletionGateway {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Answers a free-form question in the given topic. The completion text
    /// is returned unmodified.
    pub async fn answer_question(&self, question: &str, topic: &str) -> Result<String> {
        let messages = vec![
            ChatMessage::system(format!("You are an expert tutor in {topic}.")),
            ChatMessage::user(question),
        ];

        self.client.complete(messages).await
    }

    /// Generates `num_questions` multiple-choice questions about `topic`.
    /// The model is instructed to answer with a raw JSON array, but the
    /// completion is not guaranteed to be pure JSON; the bracketed span is
    /// extracted and decoded, and the decoded elements are returned without
    /// further validation.
    pub async fn generate_quiz(
        &self,
        topic: &str,
        num_questions: i64,
    ) -> Result<Vec<QuizQuestion>> {
        let messages = vec![
            ChatMessage::system(
                "You are an educational content generator that creates multiple-choice quizzes.",
            ),
            ChatMessage::user(format!(
                "Generate {num_questions} multiple-choice questions about {topic}. \
                 Respond ONLY with a raw JSON array, with no surrounding prose and no code \
                 fences. Each element must be an object with the keys \"question\", \
                 \"options\" (an array of exactly 4 strings) and \"correctAnswer\" \
                 (one of the options)."
            )),
        ];

        let text = self.client.complete(messages).await?;

        let span = extract_json_array(&text)
            .ok_or_else(|| Error::malformed_quiz("no JSON array found in the model output"))?;

        debug!("Extracted candidate JSON span of {} bytes", span.len());

        serde_json::from_str::<Vec<QuizQuestion>>(span)
            .map_err(|e| Error::malformed_quiz(e.to_string()))
    }
}

/// Locates the candidate JSON array in free-form model output: the span
/// from the first `[` through the last `]`, scanned greedily across the
/// whole text. Returns `None` when no such span exists. This is a
/// pattern-matching heuristic, not a parser; brackets inside string
/// literals are not treated specially.
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if start < end {
        Some(&text[start..=end])
    } else {
        None
    }
}

/// Coerces the `num_questions` request field: absent or null defaults to 5,
/// integers and floats are truncated to an integer, numeric strings are
/// parsed. Anything else is a caller error.
pub fn coerce_num_questions(value: Option<&Value>) -> Result<i64> {
    match value {
        None | Some(Value::Null) => Ok(5),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| Error::bad_input(format!("invalid num_questions: {n}"))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::bad_input(format!("invalid num_questions: '{s}'"))),
        Some(other) => Err(Error::bad_input(format!("invalid num_questions: {other}"))),
    }
}
