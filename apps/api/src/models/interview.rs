use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Session status values persisted in `interviews.status`.
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";

/// One interview session. Created in_progress with a null score;
/// transitions to completed exactly once, at which point `overall_score`
/// and `completed_at` are set and never change again.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company: String,
    pub interview_type: String,
    pub status: String,
    pub overall_score: Option<f64>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl InterviewRow {
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }
}

/// One submitted answer. Append-only: created once per submission, never
/// updated or deleted. Ordered within a session by `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnswerRow {
    pub id: Uuid,
    pub interview_id: Uuid,
    pub question: String,
    pub answer: String,
    pub feedback: Value,
    pub score: i32,
    pub created_at: DateTime<Utc>,
}
