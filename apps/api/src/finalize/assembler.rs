//! Embeds the resume stylesheet so the HTML stands alone.

use std::sync::LazyLock;

use regex::Regex;

/// Print and screen rules shared by the web preview and the PDF renderer.
/// Only generic serif families are referenced so no font fetch is needed.
pub const RESUME_STYLESHEET: &str = r#"
    <style>
        @page {
            size: letter;
            margin: 0.75in;
        }

        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Georgia', 'Times New Roman', serif;
            line-height: 1.5;
            color: #1a1a1a;
            font-size: 11pt;
            max-width: 8.5in;
            margin: 0 auto;
            background: white;
        }

        h1 { font-size: 26pt; font-weight: 700; margin-bottom: 8px; color: #000; }
        h2 { font-size: 14pt; font-weight: 700; margin-top: 22px; margin-bottom: 10px; border-bottom: 2px solid #000; padding-bottom: 4px; letter-spacing: 1px; text-transform: uppercase; color: #000; page-break-after: avoid; }
        h3 { font-size: 12pt; font-weight: 600; margin-top: 12px; margin-bottom: 4px; color: #000; }
        p { margin: 6px 0; }
        ul { margin: 8px 0; padding-left: 24px; }
        li { margin: 4px 0; }
        strong, b { font-weight: 700 !important; color: #000 !important; }

        .job-entry { page-break-inside: avoid; margin-bottom: 16px; }

        .job-header { display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 4px; }
        .job-title { font-weight: 700; font-size: 11pt; color: #000; }
        .date { font-size: 10pt; color: #444; font-style: italic; white-space: nowrap; }
    </style>
    "#;

static HEAD_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<head(\s[^>]*)?>").expect("head pattern is valid"));

static HEAD_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</head\s*>").expect("head close pattern is valid"));

static HTML_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<html(\s[^>]*)?>").expect("html pattern is valid"));

/// The structural shape of a fragment, which decides where the stylesheet goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentShape {
    /// Has its own `<head>`; stylesheet is appended to it.
    WithHead,
    /// Has `<html>` but no head; a head is synthesized after the root tag.
    RootOnly,
    /// Bare content; a full document is synthesized around it.
    Bare,
}

impl FragmentShape {
    pub fn detect(fragment: &str) -> Self {
        if HEAD_OPEN.is_match(fragment) {
            FragmentShape::WithHead
        } else if HTML_OPEN.is_match(fragment) {
            FragmentShape::RootOnly
        } else {
            FragmentShape::Bare
        }
    }
}

/// Inserts `stylesheet` into `fragment`, synthesizing whatever structure is missing.
/// Never fails; the markup is not validated.
pub fn assemble(fragment: &str, stylesheet: &str) -> String {
    match FragmentShape::detect(fragment) {
        FragmentShape::WithHead => {
            // A head that is never closed still gets the styles, right after it opens.
            let at = match HEAD_CLOSE.find(fragment) {
                Some(close) => close.start(),
                None => HEAD_OPEN.find(fragment).map_or(0, |open| open.end()),
            };
            splice(fragment, at, stylesheet)
        }
        FragmentShape::RootOnly => {
            let at = HTML_OPEN.find(fragment).map_or(0, |open| open.end());
            splice(fragment, at, &format!("<head>{stylesheet}</head>"))
        }
        FragmentShape::Bare => format!(
            "<!DOCTYPE html><html><head><meta charset='UTF-8'>{stylesheet}</head><body>{fragment}</body></html>"
        ),
    }
}

fn splice(fragment: &str, at: usize, insert: &str) -> String {
    let mut out = String::with_capacity(fragment.len() + insert.len());
    out.push_str(&fragment[..at]);
    out.push_str(insert);
    out.push_str(&fragment[at..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSS: &str = "<style>p{}</style>";

    #[test]
    fn test_bare_fragment_gets_full_document() {
        let out = assemble("<h1>Jane</h1>", CSS);
        assert_eq!(
            out,
            "<!DOCTYPE html><html><head><meta charset='UTF-8'><style>p{}</style></head><body><h1>Jane</h1></body></html>"
        );
    }

    #[test]
    fn test_root_without_head_gets_synthesized_head() {
        let out = assemble("<html><body><p>x</p></body></html>", CSS);
        assert_eq!(
            out,
            "<html><head><style>p{}</style></head><body><p>x</p></body></html>"
        );
        assert!(!out.starts_with("<!DOCTYPE"));
    }

    #[test]
    fn test_existing_head_keeps_content_and_gains_styles() {
        let html = "<html><head><title>CV</title></head><body></body></html>";
        let out = assemble(html, CSS);
        assert_eq!(
            out,
            "<html><head><title>CV</title><style>p{}</style></head><body></body></html>"
        );
    }

    #[test]
    fn test_root_with_attributes_is_recognized() {
        let out = assemble(r#"<html lang="en"><body>x</body></html>"#, CSS);
        assert_eq!(
            out,
            r#"<html lang="en"><head><style>p{}</style></head><body>x</body></html>"#
        );
    }

    #[test]
    fn test_header_tag_is_not_a_head() {
        assert_eq!(FragmentShape::detect("<header>x</header>"), FragmentShape::Bare);
    }

    #[test]
    fn test_unclosed_head_gets_styles_after_open_tag() {
        let out = assemble("<html><head><title>CV</title><body>x</body>", CSS);
        assert_eq!(
            out,
            "<html><head><style>p{}</style><title>CV</title><body>x</body>"
        );
    }

    #[test]
    fn test_empty_fragment_becomes_empty_document() {
        let out = assemble("", CSS);
        assert!(out.contains("<body></body>"));
        assert!(out.contains("charset='UTF-8'"));
    }

    #[test]
    fn test_stylesheet_covers_print_contract() {
        assert!(RESUME_STYLESHEET.contains("size: letter"));
        assert!(RESUME_STYLESHEET.contains("text-transform: uppercase"));
        assert!(RESUME_STYLESHEET.contains("page-break-inside: avoid"));
        assert!(RESUME_STYLESHEET.contains("serif"));
        assert!(!RESUME_STYLESHEET.contains("url("));
    }
}
