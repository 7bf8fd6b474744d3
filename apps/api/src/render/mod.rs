//! PDF rendering through an external engine.
//!
//! `AppState` holds an `Arc<dyn PdfRenderer>`. The default `CommandPdfRenderer`
//! shells out to a WeasyPrint-compatible CLI (`<bin> input.html output.pdf`).

pub mod handlers;

use std::process::Stdio;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error while rendering: {0}")]
    Io(#[from] std::io::Error),

    #[error("renderer '{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("renderer produced an empty document")]
    EmptyOutput,
}

#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: &str) -> Result<Bytes, RenderError>;
}

/// Renders by invoking an external program on a temp directory.
pub struct CommandPdfRenderer {
    program: String,
}

impl CommandPdfRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl PdfRenderer for CommandPdfRenderer {
    async fn render(&self, html: &str) -> Result<Bytes, RenderError> {
        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join("resume.html");
        let output = workdir.path().join("resume.pdf");

        tokio::fs::write(&input, html).await?;

        debug!("Rendering PDF with '{}'", self.program);
        let result = Command::new(&self.program)
            .arg(&input)
            .arg(&output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !result.status.success() {
            return Err(RenderError::Failed {
                program: self.program.clone(),
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        let pdf = tokio::fs::read(&output).await?;
        if pdf.is_empty() {
            return Err(RenderError::EmptyOutput);
        }

        info!("Rendered PDF ({} bytes)", pdf.len());
        Ok(Bytes::from(pdf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_output_file_is_returned() {
        // `cp input output` stands in for a real engine.
        let renderer = CommandPdfRenderer::new("cp");
        let bytes = renderer.render("<html><body>Jane</body></html>").await.unwrap();
        assert_eq!(&bytes[..], b"<html><body>Jane</body></html>");
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_failure() {
        let renderer = CommandPdfRenderer::new("false");
        let err = renderer.render("<p>x</p>").await.unwrap_err();
        assert!(matches!(err, RenderError::Failed { .. }));
    }

    #[tokio::test]
    async fn test_missing_program_is_io_error() {
        let renderer = CommandPdfRenderer::new("definitely-not-a-real-renderer");
        let err = renderer.render("<p>x</p>").await.unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }

    #[tokio::test]
    async fn test_empty_output_is_rejected() {
        let renderer = CommandPdfRenderer::new("cp");
        let err = renderer.render("").await.unwrap_err();
        assert!(matches!(err, RenderError::EmptyOutput));
    }
}
