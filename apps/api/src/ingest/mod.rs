// Resume ingestion: uploaded file bytes → plain resume text.
// Extraction is CPU-bound and must run inside tokio::task::spawn_blocking.

pub mod docx;
pub mod handlers;

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file type '{0}'")]
    UnsupportedType(String),

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("could not read DOCX: {0}")]
    Docx(String),

    #[error("no text could be extracted from the document")]
    EmptyDocument,
}

/// Resume formats accepted on upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
}

impl FileType {
    /// Picks the format from a file name's extension (case-insensitive).
    pub fn from_filename(name: &str) -> Result<Self, IngestError> {
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Ok(FileType::Pdf),
            "docx" => Ok(FileType::Docx),
            _ => Err(IngestError::UnsupportedType(ext)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Docx => "docx",
        }
    }
}

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern is valid")
});

static EXCESS_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("blank line pattern is valid"));

/// Extracts plain text from an uploaded resume.
pub fn extract_resume_text(bytes: &[u8], file_type: FileType) -> Result<String, IngestError> {
    let raw = match file_type {
        FileType::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| IngestError::Pdf(e.to_string()))?
        }
        FileType::Docx => docx::extract_text(bytes)?,
    };

    let text = tidy_text(&raw);
    if text.is_empty() {
        return Err(IngestError::EmptyDocument);
    }

    debug!(
        "Extracted {} chars from {} resume",
        text.chars().count(),
        file_type.as_str()
    );
    Ok(text)
}

/// Trims trailing whitespace per line and collapses runs of blank lines.
fn tidy_text(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().map(str::trim_end).collect();
    let joined = lines.join("\n");
    EXCESS_BLANK_LINES
        .replace_all(joined.trim(), "\n\n")
        .into_owned()
}

/// First email address found in `text`, used to prefill the application email.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// First `max_chars` characters of `text`, with an ellipsis when truncated.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_from_extension() {
        assert_eq!(FileType::from_filename("cv.pdf").unwrap(), FileType::Pdf);
        assert_eq!(FileType::from_filename("My.Resume.DOCX").unwrap(), FileType::Docx);
    }

    #[test]
    fn test_file_type_rejects_other_extensions() {
        assert!(matches!(
            FileType::from_filename("resume.txt"),
            Err(IngestError::UnsupportedType(ext)) if ext == "txt"
        ));
        assert!(FileType::from_filename("resume").is_err());
    }

    #[test]
    fn test_extract_email_finds_first_address() {
        let jd = "Send your CV to jobs@acme.io or hr@acme.io by Friday.";
        assert_eq!(extract_email(jd).as_deref(), Some("jobs@acme.io"));
    }

    #[test]
    fn test_extract_email_none_when_absent() {
        assert!(extract_email("Apply via our careers page.").is_none());
    }

    #[test]
    fn test_tidy_text_collapses_blank_lines() {
        let raw = "Jane Doe   \n\n\n\n\nEngineer\t\n";
        assert_eq!(tidy_text(raw), "Jane Doe\n\nEngineer");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("héllo world", 5), "héllo...");
        assert_eq!(preview("short", 500), "short");
    }

    #[test]
    fn test_garbage_pdf_is_an_error() {
        assert!(extract_resume_text(b"not a pdf", FileType::Pdf).is_err());
    }
}
