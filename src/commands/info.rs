use anyhow::Result;
use std::path::Path;

use crate::pdf::PdfDocument;

pub fn run<P: AsRef<Path>>(path: P) -> Result<()> {
    let doc = PdfDocument::open(&path)?;

    println!("File: {}", path.as_ref().display());
    println!("Pages: {}", doc.page_count());

    Ok(())
}
