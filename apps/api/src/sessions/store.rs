//! Persistence surface for interview sessions and answers.
//!
//! Sessions are mutated exactly once (the completion update); answers are
//! append-only and never touched after insert.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::interview::{AnswerRow, InterviewRow, STATUS_COMPLETED, STATUS_IN_PROGRESS};

/// Inserts a new in_progress session and returns the stored row.
pub async fn insert_interview(
    pool: &PgPool,
    user_id: Uuid,
    company: &str,
    interview_type: &str,
) -> Result<InterviewRow, sqlx::Error> {
    let row = sqlx::query_as::<_, InterviewRow>(
        r#"
        INSERT INTO interviews (id, user_id, company, interview_type, status, started_at)
        VALUES ($1, $2, $3, $4, $5, now())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(company)
    .bind(interview_type)
    .bind(STATUS_IN_PROGRESS)
    .fetch_one(pool)
    .await?;

    info!("Started interview {} ({company}/{interview_type})", row.id);
    Ok(row)
}

pub async fn get_interview(pool: &PgPool, id: Uuid) -> Result<Option<InterviewRow>, sqlx::Error> {
    Ok(
        sqlx::query_as::<_, InterviewRow>("SELECT * FROM interviews WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?,
    )
}

/// All sessions for a user, newest first (dashboard listing order).
pub async fn list_interviews(pool: &PgPool, user_id: Uuid) -> Result<Vec<InterviewRow>, sqlx::Error> {
    Ok(sqlx::query_as::<_, InterviewRow>(
        "SELECT * FROM interviews WHERE user_id = $1 ORDER BY started_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

/// Completed sessions with a score, oldest completion first (timeline
/// order for the progress view).
pub async fn list_completed_interviews(pool: &PgPool, user_id: Uuid) -> Result<Vec<InterviewRow>, sqlx::Error> {
    Ok(sqlx::query_as::<_, InterviewRow>(
        r#"
        SELECT * FROM interviews
        WHERE user_id = $1 AND status = $2 AND overall_score IS NOT NULL
        ORDER BY completed_at ASC
        "#,
    )
    .bind(user_id)
    .bind(STATUS_COMPLETED)
    .fetch_all(pool)
    .await?)
}

/// Appends one answer. Never updates existing rows.
pub async fn insert_answer(
    pool: &PgPool,
    interview_id: Uuid,
    question: &str,
    answer: &str,
    feedback: &serde_json::Value,
    score: i32,
) -> Result<AnswerRow, sqlx::Error> {
    Ok(sqlx::query_as::<_, AnswerRow>(
        r#"
        INSERT INTO interview_answers (id, interview_id, question, answer, feedback, score, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, now())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(interview_id)
    .bind(question)
    .bind(answer)
    .bind(feedback)
    .bind(score)
    .fetch_one(pool)
    .await?)
}

/// Answers for a session in creation order.
pub async fn answers_for_interview(pool: &PgPool, interview_id: Uuid) -> Result<Vec<AnswerRow>, sqlx::Error> {
    Ok(sqlx::query_as::<_, AnswerRow>(
        "SELECT * FROM interview_answers WHERE interview_id = $1 ORDER BY created_at ASC",
    )
    .bind(interview_id)
    .fetch_all(pool)
    .await?)
}

/// Marks a session completed with its final score. Guarded on status so a
/// session completes at most once; returns whether this call performed
/// the transition (false when the row was no longer in progress).
pub async fn complete_interview(
    pool: &PgPool,
    id: Uuid,
    overall_score: f64,
    completed_at: DateTime<Utc>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE interviews
        SET status = $1, overall_score = $2, completed_at = $3
        WHERE id = $4 AND status = $5
        "#,
    )
    .bind(STATUS_COMPLETED)
    .bind(overall_score)
    .bind(completed_at)
    .bind(id)
    .bind(STATUS_IN_PROGRESS)
    .execute(pool)
    .await?;

    let transitioned = result.rows_affected() > 0;
    if transitioned {
        info!("Completed interview {id} with overall score {overall_score:.1}");
    } else {
        warn!("Completion update for interview {id} matched no in-progress row");
    }
    Ok(transitioned)
}
