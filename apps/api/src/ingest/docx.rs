//! DOCX text extraction: reads `word/document.xml` out of the zip container.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use zip::ZipArchive;

use super::IngestError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Concatenates the text runs of a DOCX body. Paragraphs end with a newline,
/// `w:tab` becomes a tab and `w:br` a line break.
pub fn extract_text(bytes: &[u8]) -> Result<String, IngestError> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| IngestError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| IngestError::Docx(format!("{DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| IngestError::Docx(e.to_string()))?;

    text_from_document_xml(&xml)
}

fn text_from_document_xml(xml: &str) -> Result<String, IngestError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => out.push('\t'),
                b"w:br" | b"w:cr" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t.unescape().map_err(|e| IngestError::Docx(e.to_string()))?;
                out.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(IngestError::Docx(format!(
                    "malformed XML at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">Rust &amp; Go </w:t></w:r><w:r><w:tab/><w:t>2021</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    fn make_docx(document_xml: &str) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file(DOCUMENT_PART, FileOptions::default()).unwrap();
        zip.write_all(document_xml.as_bytes()).unwrap();
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extracts_paragraphs_and_tabs() {
        let text = extract_text(&make_docx(BODY)).unwrap();
        assert_eq!(text, "Jane Doe\nRust & Go \t2021\n");
    }

    #[test]
    fn test_ignores_text_outside_runs() {
        let xml = r#"<w:document><w:body><w:p><w:instrText>PAGE</w:instrText><w:t>Hi</w:t></w:p></w:body></w:document>"#;
        assert_eq!(text_from_document_xml(xml).unwrap(), "Hi\n");
    }

    #[test]
    fn test_missing_document_part_is_error() {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file("word/styles.xml", FileOptions::default()).unwrap();
        zip.write_all(b"<w:styles/>").unwrap();
        let bytes = zip.finish().unwrap().into_inner();
        assert!(matches!(extract_text(&bytes), Err(IngestError::Docx(_))));
    }

    #[test]
    fn test_not_a_zip_is_error() {
        assert!(matches!(extract_text(b"plain text"), Err(IngestError::Docx(_))));
    }
}
