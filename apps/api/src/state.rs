use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::LlmClient;
use crate::render::PdfRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every external collaborator is an explicit value here; nothing is global.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Pluggable PDF engine. Default: CommandPdfRenderer on `PDF_RENDERER_BIN`.
    pub pdf_renderer: Arc<dyn PdfRenderer>,
}
