use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::session::Session;

pub fn run(input: &Path, pages: &str, output: Option<&Path>) -> Result<()> {
    let mut session = Session::open(input)?;
    let selected = session.select_expression(pages)?;
    let bytes = session.export()?;

    let output: PathBuf = match output {
        Some(path) => path.to_path_buf(),
        None => session.default_output_name(),
    };
    std::fs::write(&output, &bytes)
        .with_context(|| format!("Failed to save PDF: {}", output.display()))?;

    println!("Extracted {} page(s) to {}", selected.len(), output.display());

    Ok(())
}
