//! Axum route handlers for the preview and PDF endpoints.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::finalize::{finalize_document, RESUME_STYLESHEET};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DocumentRequest {
    pub html: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Finalizes `html` unless it already went through the pipeline. Documents
/// produced by `/api/tailor` or `/api/preview` carry the stylesheet and are
/// passed through as-is so the styles are not embedded twice.
fn ensure_finalized(request: &DocumentRequest) -> String {
    if request.html.contains(RESUME_STYLESHEET) {
        request.html.clone()
    } else {
        finalize_document(&request.html, &request.keywords)
    }
}

/// POST /api/preview
///
/// Runs the finalization pipeline on a raw fragment and returns the document.
pub async fn handle_preview(Json(request): Json<DocumentRequest>) -> Result<Html<String>, AppError> {
    if request.html.trim().is_empty() {
        return Err(AppError::Validation("html cannot be empty".to_string()));
    }

    Ok(Html(ensure_finalized(&request)))
}

/// POST /api/generate-pdf
///
/// Renders the document to PDF and returns it as an attachment.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    Json(request): Json<DocumentRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.html.trim().is_empty() {
        return Err(AppError::Validation("html cannot be empty".to_string()));
    }

    info!(
        "Generating PDF with {} keywords to highlight",
        request.keywords.len()
    );

    let document = ensure_finalized(&request);
    let pdf = state.pdf_renderer.render(&document).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=resume.pdf",
            ),
        ],
        pdf,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_fragment_is_finalized() {
        let request = DocumentRequest {
            html: "<p>Kotlin dev</p>".to_string(),
            keywords: vec!["Kotlin".to_string()],
        };
        let doc = ensure_finalized(&request);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(">Kotlin</strong>"));
    }

    #[test]
    fn test_finalized_document_is_not_restyled() {
        let once = finalize_document("<p>Kotlin dev</p>", &["Kotlin"]);
        let request = DocumentRequest {
            html: once.clone(),
            keywords: vec!["Kotlin".to_string()],
        };
        assert_eq!(ensure_finalized(&request), once);
    }
}
