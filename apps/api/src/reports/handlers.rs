use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::AppError;
use crate::reports::{progress_report, summary_stats, ProgressReport, SummaryStats};
use crate::sessions::handlers::UserIdQuery;
use crate::sessions::store;
use crate::state::AppState;

/// GET /api/v1/reports/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SummaryStats>, AppError> {
    let interviews = store::list_interviews(&state.db, params.user_id).await?;
    Ok(Json(summary_stats(&interviews)))
}

/// GET /api/v1/reports/progress
pub async fn handle_progress(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProgressReport>, AppError> {
    let completed = store::list_completed_interviews(&state.db, params.user_id).await?;
    Ok(Json(progress_report(&completed)))
}
