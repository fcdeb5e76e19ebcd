//! Static resource loading.
//!
//! Reads the fixed set of reference files a running server needs (resume
//! PDF, summary and style notes, a JSON facts file) into an immutable
//! bundle. Each load is independent: a missing file gets its placeholder
//! without affecting the others. Only absence is tolerated; a corrupt PDF
//! or malformed JSON aborts the load.

use crate::error::Result;
use serde_json::{Value, json};
use std::io;
use std::path::Path;

const LINKEDIN_PLACEHOLDER: &str = "LinkedIn profile not available";
const SUMMARY_PLACEHOLDER: &str = "Summary not available";
const STYLE_PLACEHOLDER: &str = "Style not available";

/// The four static reference values, loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct ResourceBundle {
    /// Text of every non-empty page of `linkedin.pdf`, concatenated in order
    pub linkedin: String,

    /// Contents of `summary.txt`
    pub summary: String,

    /// Contents of `style.txt`
    pub style: String,

    /// Parsed contents of `facts.json`
    pub facts: Value,
}

impl ResourceBundle {
    /// Loads all four resources from the given data directory.
    ///
    /// Loading is synchronous and intended to run once at startup, so load
    /// timing and failure are explicit rather than hidden behind first
    /// access.
    pub fn load(data_dir: &Path) -> Result<Self> {
        Ok(Self {
            linkedin: load_pdf_text(&data_dir.join("linkedin.pdf"))?,
            summary: load_text(&data_dir.join("summary.txt"), SUMMARY_PLACEHOLDER)?,
            style: load_text(&data_dir.join("style.txt"), STYLE_PLACEHOLDER)?,
            facts: load_facts(&data_dir.join("facts.json"))?,
        })
    }
}

/// Extracts and concatenates the text of every page, preserving page order
/// and skipping pages that extract to nothing.
fn load_pdf_text(path: &Path) -> Result<String> {
    match std::fs::read(path) {
        Ok(bytes) => {
            let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)?;
            Ok(pages.into_iter().filter(|page| !page.is_empty()).collect())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(LINKEDIN_PLACEHOLDER.to_string()),
        Err(e) => Err(e.into()),
    }
}

fn load_text(path: &Path, placeholder: &str) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(placeholder.to_string()),
        Err(e) => Err(e.into()),
    }
}

fn load_facts(path: &Path) -> Result<Value> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(json!({
            "name": "Unknown",
            "full_name": "Unknown",
        })),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PackagerError;

    /// Builds a three-page PDF by hand: pages 1 and 3 carry a line of text,
    /// page 2 has no content stream. Object offsets and stream lengths are
    /// computed at assembly time so the xref table is valid.
    fn three_page_pdf() -> Vec<u8> {
        let page_text = |obj: u32, text: &str| {
            let content = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text);
            format!(
                "{} 0 obj\n<< /Length {} >>\nstream\n{}\nendstream\nendobj\n",
                obj,
                content.len(),
                content
            )
        };

        let objects = [
            "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n".to_string(),
            "2 0 obj\n<< /Type /Pages /Kids [3 0 R 4 0 R 5 0 R] /Count 3 >>\nendobj\n".to_string(),
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 8 0 R >> >> /Contents 6 0 R >>\nendobj\n"
                .to_string(),
            "4 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >>\nendobj\n"
                .to_string(),
            "5 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 8 0 R >> >> /Contents 7 0 R >>\nendobj\n"
                .to_string(),
            page_text(6, "First page"),
            page_text(7, "Third page"),
            "8 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n"
                .to_string(),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for object in &objects {
            offsets.push(pdf.len());
            pdf.extend_from_slice(object.as_bytes());
        }

        let xref_start = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        pdf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_start
            )
            .as_bytes(),
        );
        pdf
    }

    #[test]
    fn empty_pdf_pages_contribute_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let pdf = three_page_pdf();
        std::fs::write(tmp.path().join("linkedin.pdf"), &pdf).unwrap();

        // Fixture sanity: three pages, the middle one extracting no text
        let pages = pdf_extract::extract_text_from_mem_by_pages(&pdf).unwrap();
        assert_eq!(pages.len(), 3);
        assert!(pages[0].contains("First page"));
        assert!(pages[1].is_empty());
        assert!(pages[2].contains("Third page"));

        let bundle = ResourceBundle::load(tmp.path()).unwrap();

        // Page 1 text immediately followed by page 3 text, no separator
        assert_eq!(bundle.linkedin, format!("{}{}", pages[0], pages[2]));
    }

    #[test]
    fn malformed_pdf_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("linkedin.pdf"), b"%PDF-1.4 garbage").unwrap();

        let err = ResourceBundle::load(tmp.path()).unwrap_err();
        assert!(matches!(err, PackagerError::Pdf(_)));
    }

    #[test]
    fn facts_parse_exactly() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("facts.json"),
            r#"{"name": "Ada", "full_name": "Ada Lovelace"}"#,
        )
        .unwrap();

        let bundle = ResourceBundle::load(tmp.path()).unwrap();

        assert_eq!(
            bundle.facts,
            json!({"name": "Ada", "full_name": "Ada Lovelace"})
        );
    }

    #[test]
    fn missing_files_yield_placeholders() {
        let tmp = tempfile::tempdir().unwrap();

        let bundle = ResourceBundle::load(tmp.path()).unwrap();

        assert_eq!(bundle.linkedin, "LinkedIn profile not available");
        assert_eq!(bundle.summary, "Summary not available");
        assert_eq!(bundle.style, "Style not available");
        assert_eq!(
            bundle.facts,
            json!({"name": "Unknown", "full_name": "Unknown"})
        );
    }

    #[test]
    fn loads_are_independent() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("style.txt"), "short sentences").unwrap();
        // summary.txt, linkedin.pdf and facts.json absent

        let bundle = ResourceBundle::load(tmp.path()).unwrap();

        assert_eq!(bundle.style, "short sentences");
        assert_eq!(bundle.summary, "Summary not available");
    }

    #[test]
    fn text_files_are_read_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("summary.txt"), "Engineer.\nSpeaker.\n").unwrap();

        let bundle = ResourceBundle::load(tmp.path()).unwrap();

        assert_eq!(bundle.summary, "Engineer.\nSpeaker.\n");
    }

    #[test]
    fn malformed_facts_are_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("facts.json"), "{not json").unwrap();

        let err = ResourceBundle::load(tmp.path()).unwrap_err();
        assert!(matches!(err, PackagerError::Json(_)));
    }
}
