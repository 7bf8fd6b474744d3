//! Axum route handlers for resume upload.

use anyhow::anyhow;
use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::ingest::{extract_resume_text, preview, FileType};
use crate::state::AppState;

const PREVIEW_CHARS: usize = 500;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub resume_id: Uuid,
    pub preview: String,
}

/// POST /api/upload-resume
///
/// Accepts a multipart `file` field (PDF or DOCX), extracts its text and stores
/// it as the current base resume. The most recent upload is used for tailoring.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let (file_name, data) = read_file_field(&mut multipart).await?;
    let file_type = FileType::from_filename(&file_name)?;

    info!(
        "Received resume upload '{}' ({} bytes)",
        file_name,
        data.len()
    );

    let content = tokio::task::spawn_blocking(move || extract_resume_text(&data, file_type))
        .await
        .map_err(|e| AppError::Internal(anyhow!("Resume extraction task failed: {e}")))??;

    let resume_id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO user_resumes (id, original_content, file_type) VALUES ($1, $2, $3)",
    )
    .bind(resume_id)
    .bind(&content)
    .bind(file_type.as_str())
    .execute(&state.db)
    .await?;

    info!("Stored resume {resume_id}");

    Ok(Json(UploadResponse {
        message: "Resume uploaded successfully".to_string(),
        resume_id,
        preview: preview(&content, PREVIEW_CHARS),
    }))
}

/// Pulls the `file` field out of the multipart body.
async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Uploaded file has no name".to_string()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
        if data.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }
        return Ok((file_name, data));
    }

    Err(AppError::Validation(
        "Missing multipart field 'file'".to_string(),
    ))
}
