pub mod health;
pub mod resumes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resumes", post(resumes::handle_generate))
        .route("/api/v1/resumes/render", post(resumes::handle_render))
        .route(
            "/api/v1/resumes/:username/pdf",
            get(resumes::handle_download),
        )
        .with_state(state)
}
