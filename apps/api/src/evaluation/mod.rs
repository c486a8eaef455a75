//! Evaluation Service — the answer-evaluation pipeline.
//!
//! One stateless request/response function: given a question, a
//! candidate's answer, and an interview category, produce four 1-10
//! sub-scores (communication, confidence, grammar, relevance), a summary,
//! and improvement suggestions by delegating to the scoring backend and
//! normalizing its reply into a fixed score range.
//!
//! The fallible boundary (the backend call) is kept separate from the
//! always-succeeding normalization step: `try_parse_feedback` never
//! fails, it returns either the parsed object or a fixed neutral
//! fallback.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::bank::Category;
use crate::llm_client::{LlmClient, LlmError};

/// Per-answer feedback value object. Sub-scores are 1-10; embedded in an
/// Answer row as jsonb and never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub communication: u8,
    pub confidence: u8,
    pub grammar: u8,
    pub relevance: u8,
    pub summary: String,
    pub improvements: String,
}

/// Result of evaluating one answer: the 0-100 overall score plus the
/// feedback it was derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: u32,
    pub feedback: Feedback,
}

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Evaluation failed: {0}")]
    Upstream(#[from] LlmError),
}

/// Renders the failure envelope callers expect: a non-2xx status with
/// `{error, score: 0, feedback: <zeroed>}` so the client can show a
/// terminal state without crashing.
impl IntoResponse for EvalError {
    fn into_response(self) -> Response {
        let status = match &self {
            EvalError::Validation(_) => StatusCode::BAD_REQUEST,
            EvalError::Upstream(e) => {
                tracing::error!("Evaluation backend failure: {e}");
                StatusCode::BAD_GATEWAY
            }
        };

        let body = Json(json!({
            "error": self.to_string(),
            "score": 0,
            "feedback": zeroed_feedback(),
        }));

        (status, body).into_response()
    }
}

/// The scoring backend seam. Production uses `LlmClient`; tests swap in a
/// mock to drive the pipeline without network access.
#[async_trait]
pub trait ScoringBackend: Send + Sync {
    /// Returns the raw text content of the model's reply.
    async fn score(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl ScoringBackend for LlmClient {
    async fn score(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.chat(system, prompt).await
    }
}

/// Evaluates one answer. Empty inputs fail before any backend call; a
/// backend failure propagates as `EvalError::Upstream`; an unparseable
/// but successful reply degrades to the neutral fallback feedback.
///
/// Every call is one independent request: no retries, no caching of
/// identical question/answer pairs.
pub async fn evaluate(
    backend: &dyn ScoringBackend,
    question: &str,
    answer: &str,
    category: Category,
) -> Result<Evaluation, EvalError> {
    if question.trim().is_empty() {
        return Err(EvalError::Validation("Question is required".to_string()));
    }
    if answer.trim().is_empty() {
        return Err(EvalError::Validation("Answer is required".to_string()));
    }

    let system = prompts::build_system_prompt(category);
    let prompt = prompts::build_user_prompt(question, answer);

    let raw = backend.score(&system, &prompt).await?;

    let feedback = try_parse_feedback(&raw);
    let score = overall_score(&feedback);

    Ok(Evaluation { score, feedback })
}

/// Computes the integer overall score: the four sub-scores (each capped
/// at 10) summed and renormalized from a 40-point to a 100-point scale.
pub fn overall_score(feedback: &Feedback) -> u32 {
    let sum = [
        feedback.communication,
        feedback.confidence,
        feedback.grammar,
        feedback.relevance,
    ]
    .iter()
    .map(|&s| u32::from(s.min(10)))
    .sum::<u32>();

    ((f64::from(sum) / 40.0) * 100.0).round() as u32
}

/// Normalizes a raw model reply into `Feedback`. Never fails: tries a
/// fenced ```json block first, then the first top-level `{...}` span,
/// then a direct parse, and substitutes the neutral fallback when none of
/// those yield valid feedback.
pub fn try_parse_feedback(raw: &str) -> Feedback {
    let candidates = [
        extract_fenced_block(raw),
        extract_brace_span(raw),
        Some(raw.trim()),
    ];

    for candidate in candidates.into_iter().flatten() {
        if let Ok(feedback) = serde_json::from_str::<Feedback>(candidate) {
            return feedback;
        }
    }

    warn!("Could not parse structured feedback from model reply; using fallback");
    fallback_feedback()
}

/// The fixed neutral feedback substituted when the reply parses to
/// nothing usable. Keeps the pipeline moving with a valid result.
pub fn fallback_feedback() -> Feedback {
    Feedback {
        communication: 7,
        confidence: 7,
        grammar: 7,
        relevance: 7,
        summary: "Unable to parse detailed feedback. Your answer was received.".to_string(),
        improvements: "Continue practicing and refining your responses.".to_string(),
    }
}

/// All-zero feedback embedded in the failure envelope.
pub fn zeroed_feedback() -> Feedback {
    Feedback {
        communication: 0,
        confidence: 0,
        grammar: 0,
        relevance: 0,
        summary: "Error occurred during evaluation".to_string(),
        improvements: "Please try again".to_string(),
    }
}

/// Extracts the body of a ```json ... ``` (or bare ```) fenced block.
fn extract_fenced_block(text: &str) -> Option<&str> {
    let text = text.trim();
    let after_open = text
        .split_once("```json")
        .or_else(|| text.split_once("```"))?
        .1;
    let body = after_open.split_once("```")?.0;
    Some(body.trim())
}

/// Extracts the first top-level `{...}` span (first `{` to last `}`).
fn extract_brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&text[start..=end])
}
