//! Text extraction: file path in, plain text out.
//!
//! Dispatch is by lowercased file extension. PDF goes through `pdf-extract`;
//! DOCX is a ZIP whose `word/document.xml` holds the paragraphs, streamed
//! with `quick-xml` (paragraph text only; tables, headers and footers are
//! ignored); txt and md are read as UTF-8. The source file is never written
//! or mutated.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ParseError;

pub(crate) fn extract_text(path: &Path) -> Result<String, ParseError> {
    if !path.exists() {
        return Err(ParseError::FileNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => extract_pdf(path),
        "docx" => extract_docx(path),
        "txt" | "md" => extract_plain(path),
        _ => Err(ParseError::UnsupportedFormat(format!(".{extension}"))),
    }
}

fn extract_pdf(path: &Path) -> Result<String, ParseError> {
    let text = pdf_extract::extract_text(path)
        .map_err(|e| ParseError::extraction_failed(path, e))?;
    Ok(text.trim().to_string())
}

fn extract_plain(path: &Path) -> Result<String, ParseError> {
    let text =
        std::fs::read_to_string(path).map_err(|e| ParseError::extraction_failed(path, e))?;
    Ok(text.trim().to_string())
}

/// Reads every `<w:p>` paragraph of `word/document.xml` in document order,
/// joining paragraphs with newlines.
fn extract_docx(path: &Path) -> Result<String, ParseError> {
    let file = File::open(path).map_err(|e| ParseError::extraction_failed(path, e))?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| ParseError::extraction_failed(path, e))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ParseError::extraction_failed(path, e))?
        .read_to_string(&mut document_xml)
        .map_err(|e| ParseError::extraction_failed(path, e))?;

    let mut reader = Reader::from_str(&document_xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            // A self-closing <w:p/> is still a paragraph.
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:p" => {
                paragraphs.push(std::mem::take(&mut current));
            }
            Ok(Event::Text(t)) if in_text_run => {
                let text = t
                    .decode()
                    .map_err(|e| ParseError::extraction_failed(path, e))?;
                current.push_str(&text);
            }
            // Entity references inside a text run arrive as their own events.
            Ok(Event::GeneralRef(r)) if in_text_run => {
                let char_ref = r
                    .resolve_char_ref()
                    .map_err(|e| ParseError::extraction_failed(path, e))?;
                match char_ref {
                    Some(ch) => current.push(ch),
                    None => match r.as_ref() {
                        b"amp" => current.push('&'),
                        b"lt" => current.push('<'),
                        b"gt" => current.push('>'),
                        b"quot" => current.push('"'),
                        b"apos" => current.push('\''),
                        _ => {}
                    },
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::extraction_failed(path, e)),
            Ok(_) => {}
        }
    }

    Ok(paragraphs.join("\n").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_docx(path: &Path, document_xml: &str) {
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn test_plain_text_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "\n  Jane Doe\nEngineer\n\n").unwrap();

        assert_eq!(extract_text(&path).unwrap(), "Jane Doe\nEngineer");
    }

    #[test]
    fn test_markdown_reads_as_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.md");
        std::fs::write(&path, "# Jane Doe\n\n## Skills\n").unwrap();

        assert_eq!(extract_text(&path).unwrap(), "# Jane Doe\n\n## Skills");
    }

    #[test]
    fn test_extension_dispatch_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.TXT");
        std::fs::write(&path, "Jane Doe").unwrap();

        assert_eq!(extract_text(&path).unwrap(), "Jane Doe");
    }

    #[test]
    fn test_docx_paragraphs_joined_in_document_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        write_docx(
            &path,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p><w:r><w:t>Senior </w:t></w:r><w:r><w:t>Engineer</w:t></w:r></w:p>
    <w:p/>
    <w:p><w:r><w:t>Skills &amp; Tools</w:t></w:r></w:p>
  </w:body>
</w:document>"#,
        );

        assert_eq!(
            extract_text(&path).unwrap(),
            "Jane Doe\nSenior Engineer\n\nSkills & Tools"
        );
    }

    #[test]
    fn test_docx_without_document_xml_fails_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        let file = File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        writer.start_file("word/other.xml", options).unwrap();
        writer.write_all(b"<w:document/>").unwrap();
        writer.finish().unwrap();

        let err = extract_text(&path).unwrap_err();
        assert!(matches!(err, ParseError::ExtractionFailed { .. }));
    }

    #[test]
    fn test_garbage_docx_fails_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        let err = extract_text(&path).unwrap_err();
        assert!(matches!(err, ParseError::ExtractionFailed { .. }));
    }

    #[test]
    fn test_garbage_pdf_fails_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"not a pdf at all").unwrap();

        let err = extract_text(&path).unwrap_err();
        assert!(matches!(err, ParseError::ExtractionFailed { .. }));
    }

    #[test]
    fn test_unsupported_format_raised_before_any_read() {
        // The file exists so the existence check passes and dispatch rejects
        // the extension.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "a,b,c").unwrap();

        let err = extract_text(&path).unwrap_err();
        match err {
            ParseError::UnsupportedFormat(ext) => assert_eq!(ext, ".csv"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_checked_before_format_dispatch() {
        // Even an unsupported extension reports FileNotFound when the path
        // does not exist.
        let err = extract_text(Path::new("missing.csv")).unwrap_err();
        assert!(matches!(err, ParseError::FileNotFound(_)));
    }
}
