use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use crate::page_range::parse_selection;
use crate::pdf::PdfDocument;
use crate::selection::Selection;

/// One loaded document plus the selection being built against it.
///
/// All selection mutations go through this type so every selected page is
/// guaranteed to be within the current document's page count, and replacing
/// the document always discards the stale selection.
pub struct Session {
    doc: PdfDocument,
    selection: Selection,
    source: PathBuf,
}

impl Session {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let doc = PdfDocument::open(&path)?;
        Ok(Session {
            doc,
            selection: Selection::new(),
            source: path.as_ref().to_path_buf(),
        })
    }

    /// Replace the loaded document. The new document is opened first; on
    /// failure the current document and selection are left untouched.
    pub fn reload<P: AsRef<Path>>(&mut self, path: P) -> Result<u32> {
        let doc = PdfDocument::open(&path)?;
        self.doc = doc;
        self.source = path.as_ref().to_path_buf();
        self.selection.clear();
        Ok(self.page_count())
    }

    pub fn page_count(&self) -> u32 {
        self.doc.page_count()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Parse a page expression against the current document and make it the
    /// selection, replacing whatever was selected before.
    pub fn select_expression(&mut self, expr: &str) -> Result<Vec<u32>> {
        let pages = parse_selection(expr, self.page_count())?;
        self.selection.replace_with(pages.iter().copied());
        Ok(pages)
    }

    /// Toggle a single page. Returns whether the page is now selected.
    pub fn toggle(&mut self, page: u32) -> Result<bool> {
        if page == 0 || page > self.page_count() {
            bail!("Page {} is out of range (1-{})", page, self.page_count());
        }
        Ok(self.selection.toggle(page))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Extract the selected pages (ascending) and serialize the derived
    /// document to bytes.
    pub fn export(&self) -> Result<Vec<u8>> {
        if self.selection.is_empty() {
            bail!("No pages selected");
        }
        let mut derived = self.doc.extract_pages(&self.selection.pages())?;
        PdfDocument::to_bytes(&mut derived)
    }

    /// Deterministic output name embedding the selected pages, e.g.
    /// "report_pages_1_3_7.pdf" for report.pdf with pages 1, 3 and 7.
    pub fn default_output_name(&self) -> PathBuf {
        let stem = self
            .source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("pages");
        let nums: Vec<String> = self.selection.pages().iter().map(|p| p.to_string()).collect();
        PathBuf::from(format!("{}_pages_{}.pdf", stem, nums.join("_")))
    }
}
