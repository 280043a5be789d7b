//! PDF text extraction.

use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::CorpusError;

/// Number of leading pages read from each PDF unless configured otherwise.
pub const DEFAULT_PAGES: usize = 2;

/// Source of document text.
pub trait PdfSource {
    /// Returns the text of the leading pages of the PDF at `path`.
    ///
    /// Each page's text is followed by a single space. Pages without
    /// extractable text contribute an empty string and do not fail.
    fn extract_text(&self, path: &Path) -> Result<String, CorpusError>;
}

/// PDF source backed by `lopdf`.
#[derive(Debug, Clone, Copy)]
pub struct LopdfSource {
    /// Number of leading pages to read.
    max_pages: usize,
}

impl Default for LopdfSource {
    fn default() -> Self {
        Self::new(DEFAULT_PAGES)
    }
}

impl LopdfSource {
    /// Creates a source that reads at most `max_pages` pages per document.
    pub fn new(max_pages: usize) -> Self {
        Self { max_pages }
    }
}

impl PdfSource for LopdfSource {
    fn extract_text(&self, path: &Path) -> Result<String, CorpusError> {
        let doc = Document::load(path).map_err(|e| CorpusError::pdf(path, &e))?;

        let mut text = String::new();
        for page in doc.get_pages().into_keys().take(self.max_pages) {
            let page_text = doc.extract_text(&[page]).unwrap_or_else(|e| {
                debug!(path = %path.display(), page, error = %e, "page has no extractable text");
                String::new()
            });
            text.push_str(&page_text);
            text.push(' ');
        }

        Ok(text)
    }
}

#[cfg(test)]
mod test {
    use std::{fs, path::PathBuf};

    use lopdf::{
        Object, Stream,
        content::{Content, Operation},
        dictionary,
    };
    use tempfile::TempDir;

    use super::*;

    /// Writes a PDF with one line of text per page.
    fn write_pdf(dir: &TempDir, name: &str, pages: &[&str]) -> PathBuf {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for line in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let path = dir.path().join(name);
        doc.save(&path).unwrap();
        path
    }

    #[test]
    fn reads_only_leading_pages() {
        let dir = TempDir::new().unwrap();
        let path = write_pdf(
            &dir,
            "three.pdf",
            &["Motor efficiency", "Vibration control", "Appendix tables"],
        );

        let text = LopdfSource::default().extract_text(&path).unwrap();
        assert!(text.contains("Motor efficiency"), "got {text:?}");
        assert!(text.contains("Vibration control"), "got {text:?}");
        assert!(!text.contains("Appendix"), "got {text:?}");
        assert!(text.ends_with(' '));
    }

    #[test]
    fn page_limit_is_configurable() {
        let dir = TempDir::new().unwrap();
        let path = write_pdf(&dir, "two.pdf", &["First page", "Second page"]);

        let one = LopdfSource::new(1).extract_text(&path).unwrap();
        assert!(one.contains("First"));
        assert!(!one.contains("Second"));

        let none = LopdfSource::new(0).extract_text(&path).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn unparseable_file_is_reported_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, "this is not a pdf").unwrap();

        let err = LopdfSource::default().extract_text(&path).unwrap_err();
        assert!(err.is_input_error());
        assert_eq!(err.path(), Some(path.as_path()));
    }
}
