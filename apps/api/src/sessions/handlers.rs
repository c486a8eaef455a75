use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bank::{self, Category};
use crate::errors::AppError;
use crate::evaluation::{self, EvalError};
use crate::models::interview::{AnswerRow, InterviewRow};
use crate::sessions::scoring::session_overall_score;
use crate::sessions::store;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct CreateInterviewRequest {
    pub user_id: Uuid,
    pub company: String,
    pub interview_type: Category,
}

/// POST /api/v1/interviews
pub async fn handle_create_interview(
    State(state): State<AppState>,
    Json(req): Json<CreateInterviewRequest>,
) -> Result<(StatusCode, Json<InterviewRow>), AppError> {
    if bank::company_by_id(&req.company).is_none() {
        return Err(AppError::Validation(format!(
            "Unknown company '{}'",
            req.company
        )));
    }
    if bank::session_questions(&req.company, req.interview_type).is_empty() {
        return Err(AppError::Validation(format!(
            "No {} questions available for '{}'",
            req.interview_type.as_str(),
            req.company
        )));
    }

    let row = store::insert_interview(
        &state.db,
        req.user_id,
        &req.company,
        req.interview_type.as_str(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/interviews
pub async fn handle_list_interviews(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<InterviewRow>>, AppError> {
    let rows = store::list_interviews(&state.db, params.user_id).await?;
    Ok(Json(rows))
}

#[derive(Serialize)]
pub struct InterviewDetail {
    pub interview: InterviewRow,
    pub questions: Vec<&'static str>,
    pub answered: usize,
    /// The question to present next. `None` once the session is complete.
    pub current_question: Option<&'static str>,
}

/// GET /api/v1/interviews/:id
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewDetail>, AppError> {
    let interview = store::get_interview(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))?;

    let category = stored_category(&interview)?;
    let questions: Vec<&'static str> = bank::session_questions(&interview.company, category)
        .into_iter()
        .map(|q| q.text)
        .collect();

    let answered = store::answers_for_interview(&state.db, id).await?.len();
    let current_question = if interview.is_completed() {
        None
    } else {
        questions.get(answered).copied()
    };

    Ok(Json(InterviewDetail {
        interview,
        questions,
        answered,
        current_question,
    }))
}

/// GET /api/v1/interviews/:id/answers
pub async fn handle_list_answers(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<AnswerRow>>, AppError> {
    if store::get_interview(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!("Interview {id} not found")));
    }
    let answers = store::answers_for_interview(&state.db, id).await?;
    Ok(Json(answers))
}

#[derive(Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
}

#[derive(Serialize)]
pub struct SubmitAnswerResponse {
    pub answer: AnswerRow,
    pub completed: bool,
    pub overall_score: Option<f64>,
}

/// Submission can fail on the session side (404/409, database) or on the
/// evaluation side (validation, upstream). The evaluation side renders
/// the failure envelope; everything else renders as `AppError`.
pub enum SubmitError {
    App(AppError),
    Eval(EvalError),
}

impl From<AppError> for SubmitError {
    fn from(e: AppError) -> Self {
        SubmitError::App(e)
    }
}

impl From<EvalError> for SubmitError {
    fn from(e: EvalError) -> Self {
        SubmitError::Eval(e)
    }
}

impl From<sqlx::Error> for SubmitError {
    fn from(e: sqlx::Error) -> Self {
        SubmitError::App(AppError::Database(e))
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        match self {
            SubmitError::App(e) => e.into_response(),
            SubmitError::Eval(e) => e.into_response(),
        }
    }
}

/// POST /api/v1/interviews/:id/answers
///
/// Drives one step of the session: evaluate the current question's
/// answer, persist it, and derive completion after the final answer's
/// insert. On an evaluation failure nothing is persisted and the same
/// question is re-offered on the next attempt.
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>, SubmitError> {
    let interview = store::get_interview(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))?;

    // Late writes against a completed session are rejected, not ignored
    if interview.is_completed() {
        return Err(AppError::Conflict(format!("Interview {id} is already completed")).into());
    }

    let category = stored_category(&interview)?;
    let questions = bank::session_questions(&interview.company, category);

    let answered = store::answers_for_interview(&state.db, id).await?.len();
    let question = questions.get(answered).copied().ok_or_else(|| {
        AppError::Conflict(format!("All questions for interview {id} are answered"))
    })?;

    let evaluation = evaluation::evaluate(&state.llm, question.text, &req.answer, category).await?;

    let feedback = serde_json::to_value(&evaluation.feedback)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Feedback serialization failed: {e}")))?;
    let answer = store::insert_answer(
        &state.db,
        id,
        question.text,
        &req.answer,
        &feedback,
        evaluation.score as i32,
    )
    .await?;

    // Completion is derived strictly after the final answer's insert:
    // recompute the mean from the persisted rows, not in-memory state.
    let is_final = answered + 1 == questions.len();
    let overall_score = if is_final {
        let scores: Vec<i32> = store::answers_for_interview(&state.db, id)
            .await?
            .iter()
            .map(|a| a.score)
            .collect();
        let score = session_overall_score(&scores)
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Completed session has no answers")))?;
        let transitioned = store::complete_interview(&state.db, id, score, Utc::now()).await?;
        // A completion that raced us keeps the score it already stored
        let stored = if transitioned {
            None
        } else {
            store::get_interview(&state.db, id)
                .await?
                .and_then(|i| i.overall_score)
        };
        final_reported_score(transitioned, score, stored)
    } else {
        None
    };

    Ok(Json(SubmitAnswerResponse {
        answer,
        completed: is_final,
        overall_score,
    }))
}

/// The score reported to the caller once a session completes: the freshly
/// computed mean when this request performed the transition, otherwise the
/// score the earlier completion already stored.
fn final_reported_score(transitioned: bool, computed: f64, stored: Option<f64>) -> Option<f64> {
    if transitioned {
        Some(computed)
    } else {
        stored
    }
}

/// Parses the persisted category string; rows only ever hold values that
/// were validated at creation, so a mismatch is an internal error.
fn stored_category(interview: &InterviewRow) -> Result<Category, AppError> {
    Category::parse(&interview.interview_type).ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!(
            "Interview {} has invalid category '{}'",
            interview.id,
            interview.interview_type
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_score_when_this_request_completed() {
        assert_eq!(final_reported_score(true, 80.0, None), Some(80.0));
    }

    #[test]
    fn test_final_score_defers_to_earlier_completion() {
        // The completion update matched no in-progress row: report the
        // score that completion stored, not the one computed here.
        assert_eq!(final_reported_score(false, 80.0, Some(76.5)), Some(76.5));
        assert_eq!(final_reported_score(false, 80.0, None), None);
    }
}
