//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::finalize::finalize_document;
use crate::generation::email_draft::{generate_email_draft, EmailDraft};
use crate::generation::keywords::extract_keywords;
use crate::generation::tailor::tailor_resume_content;
use crate::ingest::extract_email;
use crate::models::application::{UserResumeRow, STATUS_READY};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TailorRequest {
    pub job_description: String,
    #[serde(default)]
    pub job_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TailorResponse {
    pub application_id: Uuid,
    pub job_title: String,
    pub company: String,
    /// Finalized, standalone HTML document.
    pub html_content: String,
    pub email_detected: Option<String>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmailDraftRequest {
    pub job_title: String,
    pub company: String,
    #[serde(default)]
    pub recipient_email: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/tailor
///
/// Full pipeline: latest resume → keyword extraction → LLM tailoring →
/// finalization → stored application.
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(request): Json<TailorRequest>,
) -> Result<Json<TailorResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let resume = sqlx::query_as::<_, UserResumeRow>(
        "SELECT * FROM user_resumes ORDER BY uploaded_at DESC LIMIT 1",
    )
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::Validation("Please upload your resume first".to_string()))?;

    if let Some(url) = &request.job_url {
        info!("Tailoring resume {} for posting {url}", resume.id);
    }

    let email_detected = extract_email(&request.job_description);

    info!("Extracting keywords from job description...");
    let keywords = extract_keywords(&request.job_description, &state.llm).await;

    info!("Tailoring resume with model {}...", state.llm.model());
    let tailored =
        tailor_resume_content(&resume.original_content, &request.job_description, &state.llm)
            .await?;

    let html_content = finalize_document(&tailored.html_content, &keywords);

    let application_id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO applications \
         (id, company, job_title, job_description, tailored_resume, keywords, status) \
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(application_id)
    .bind(&tailored.company)
    .bind(&tailored.job_title)
    .bind(&request.job_description)
    .bind(&tailored.html_content)
    .bind(&keywords)
    .bind(STATUS_READY)
    .execute(&state.db)
    .await?;

    info!(
        "Stored application {application_id} ({} at {})",
        tailored.job_title, tailored.company
    );

    Ok(Json(TailorResponse {
        application_id,
        job_title: tailored.job_title,
        company: tailored.company,
        html_content,
        email_detected,
        keywords,
    }))
}

/// POST /api/email-draft
pub async fn handle_email_draft(
    State(state): State<AppState>,
    Json(request): Json<EmailDraftRequest>,
) -> Result<Json<EmailDraft>, AppError> {
    if request.job_title.trim().is_empty() || request.company.trim().is_empty() {
        return Err(AppError::Validation(
            "job_title and company are required".to_string(),
        ));
    }

    let draft = generate_email_draft(
        &request.job_title,
        &request.company,
        request.recipient_email,
        &state.llm,
    )
    .await?;

    Ok(Json(draft))
}
