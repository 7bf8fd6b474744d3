pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::generation::handlers as generation;
use crate::ingest::handlers as ingest;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Resume ingestion
        .route("/api/upload-resume", post(ingest::handle_upload_resume))
        // Generation
        .route("/api/tailor", post(generation::handle_tailor))
        .route("/api/email-draft", post(generation::handle_email_draft))
        // Finalization and rendering
        .route("/api/preview", post(render::handle_preview))
        .route("/api/generate-pdf", post(render::handle_generate_pdf))
        // Application tracking
        .route(
            "/api/applications",
            get(applications::handle_list_applications),
        )
        .route(
            "/api/applications/:id",
            delete(applications::handle_delete_application),
        )
        .route(
            "/api/applications/:id/preview",
            get(applications::handle_application_preview),
        )
        .with_state(state)
}
