//! Axum route handlers for stored applications.

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::finalize::finalize_document;
use crate::models::application::{ApplicationRow, ApplicationSummary};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// GET /api/applications
///
/// All applications, newest first.
pub async fn handle_list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<ApplicationSummary>>, AppError> {
    let applications = sqlx::query_as::<_, ApplicationSummary>(
        "SELECT id, company, job_title, status, created_at \
         FROM applications ORDER BY created_at DESC",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(applications))
}

/// GET /api/applications/:id/preview
///
/// Re-finalizes the stored generator output with the stored keywords.
pub async fn handle_application_preview(
    State(state): State<AppState>,
    Path(application_id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let application =
        sqlx::query_as::<_, ApplicationRow>("SELECT * FROM applications WHERE id = $1")
            .bind(application_id)
            .fetch_optional(&state.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Application {application_id} not found")))?;

    Ok(Html(finalize_document(
        &application.tailored_resume,
        &application.keywords,
    )))
}

/// DELETE /api/applications/:id
pub async fn handle_delete_application(
    State(state): State<AppState>,
    Path(application_id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    let result = sqlx::query("DELETE FROM applications WHERE id = $1")
        .bind(application_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Application {application_id} not found"
        )));
    }

    Ok(Json(DeleteResponse {
        message: "Application deleted".to_string(),
    }))
}
