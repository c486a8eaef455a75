use axum::{extract::State, Json};
use serde::Deserialize;

use crate::evaluation::{self, EvalError, Evaluation};
use crate::state::AppState;

/// Wire shape of an evaluation request. `interviewType` selects the
/// rubric emphasis ("technical" | "hr").
#[derive(Deserialize)]
pub struct EvaluateRequest {
    pub question: String,
    pub answer: String,
    #[serde(rename = "interviewType")]
    pub interview_type: crate::bank::Category,
}

/// POST /api/v1/evaluate
///
/// The stateless evaluation surface: success returns `{score, feedback}`;
/// failure returns the non-2xx envelope rendered by `EvalError`.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<Evaluation>, EvalError> {
    let evaluation = evaluation::evaluate(
        &state.llm,
        &req.question,
        &req.answer,
        req.interview_type,
    )
    .await?;
    Ok(Json(evaluation))
}
