pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route(
            "/api/v1/questionnaire",
            get(assessment::handle_get_questionnaire),
        )
        .route(
            "/api/v1/content-types",
            get(assessment::handle_list_content_types),
        )
        .route(
            "/api/v1/content-types/:id",
            get(assessment::handle_get_content_type),
        )
        .route(
            "/api/v1/assessments",
            post(assessment::handle_create_assessment),
        )
        // Template API
        .route("/api/v1/templates", get(generation::handle_list_templates))
        .route("/api/v1/templates/:id", get(generation::handle_get_template))
        .route(
            "/api/v1/templates/:id/render",
            post(generation::handle_render_template),
        )
        .route(
            "/api/v1/templates/:id/result",
            post(generation::handle_assessment_result),
        )
        // Lead magnet API
        .route(
            "/api/v1/lead-magnets",
            post(generation::handle_create_lead_magnet),
        )
        .with_state(state)
}
