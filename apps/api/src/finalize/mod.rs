// Resume finalization: normalize → highlight → assemble.
// Pure string transformations; safe to call from any thread, no I/O.

pub mod assembler;
pub mod highlighter;
pub mod normalizer;

pub use assembler::{assemble, RESUME_STYLESHEET};
pub use highlighter::highlight;
pub use normalizer::normalize;

use tracing::debug;

/// Turns a generated resume fragment into the standalone document served to
/// both the preview and the PDF renderer.
pub fn finalize_document<S: AsRef<str>>(fragment: &str, keywords: &[S]) -> String {
    let normalized = normalize(fragment);

    let highlighted = if keywords.is_empty() {
        normalized
    } else {
        highlight(&normalized, keywords)
    };

    let document = assemble(&highlighted, RESUME_STYLESHEET);
    debug!(
        "Finalized resume document: {} bytes in, {} bytes out",
        fragment.len(),
        document.len()
    );
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finalize::highlighter::EMPHASIS_OPEN;

    const GENERATED: &str = "<html>\n<body>\n\
        <h1 style=\"font-size: 26pt; color: #333;\">Jane Doe</h1>\n\
        <h2>Summary</h2>\n\
        <p>Engineer with 5+ years in <strong>Python</strong> and generative ai \u{2014} shipped \u{201c}RAG\u{201d} systems.</p>\n\
        <ul><li>Led python services on AWS</li></ul>\n\
        </body>\n</html>";

    #[test]
    fn test_pipeline_end_to_end() {
        let keywords = ["Python", "AWS", "Generative AI", "AI"];
        let doc = finalize_document(GENERATED, &keywords);

        assert!(doc.starts_with("<html><head>"));
        assert!(doc.contains(RESUME_STYLESHEET));
        assert!(doc.contains("color: #000"));
        assert!(!doc.contains("color: #333"));
        assert!(doc.contains("- shipped \"RAG\" systems"));
        assert!(doc.contains("<strong>Python</strong>"));
        assert!(doc.contains(&format!("{EMPHASIS_OPEN}generative ai</strong>")));
        assert!(doc.contains(&format!("Led {EMPHASIS_OPEN}python</strong>")));
        assert!(doc.contains(&format!("{EMPHASIS_OPEN}AWS</strong>")));
    }

    #[test]
    fn test_pipeline_without_keywords_skips_highlighting() {
        let none: [&str; 0] = [];
        let doc = finalize_document("<p>Rust</p>", &none);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<body><p>Rust</p></body>"));
        assert!(!doc.contains("<strong"));
    }

    #[test]
    fn test_highlight_output_is_stable_under_rerun() {
        let keywords = ["Python", "AWS", "Generative AI", "AI"];
        let once = highlight(&normalize(GENERATED), &keywords);
        assert_eq!(highlight(&once, &keywords), once);
    }
}
