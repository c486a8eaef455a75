pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::bank::handlers as bank_handlers;
use crate::evaluation::handlers as evaluation_handlers;
use crate::reports::handlers as report_handlers;
use crate::sessions::handlers as session_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Question bank
        .route(
            "/api/v1/companies",
            get(bank_handlers::handle_list_companies),
        )
        // Evaluation service (stateless)
        .route(
            "/api/v1/evaluate",
            post(evaluation_handlers::handle_evaluate),
        )
        // Session orchestration
        .route(
            "/api/v1/interviews",
            post(session_handlers::handle_create_interview)
                .get(session_handlers::handle_list_interviews),
        )
        .route(
            "/api/v1/interviews/:id",
            get(session_handlers::handle_get_interview),
        )
        .route(
            "/api/v1/interviews/:id/answers",
            post(session_handlers::handle_submit_answer).get(session_handlers::handle_list_answers),
        )
        // Reporting
        .route(
            "/api/v1/reports/summary",
            get(report_handlers::handle_summary),
        )
        .route(
            "/api/v1/reports/progress",
            get(report_handlers::handle_progress),
        )
        .with_state(state)
}
