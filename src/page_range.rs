use anyhow::{anyhow, bail, Result};
use std::collections::BTreeSet;

/// A single token of a page expression: either one page or a closed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Single(u32),
    Span(u32, u32),
}

impl PageToken {
    /// Parse one comma-separated token like "7" or "2-5"
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            bail!("Empty page token");
        }

        if let Some((start_str, end_str)) = s.split_once('-') {
            let start = parse_page_number(start_str)?;
            let end = parse_page_number(end_str)?;
            if start > end {
                bail!("Invalid page range {}-{}: start exceeds end", start, end);
            }
            Ok(PageToken::Span(start, end))
        } else {
            Ok(PageToken::Single(parse_page_number(s)?))
        }
    }

    /// Check every covered page against the document's page count
    pub fn validate(&self, total_pages: u32) -> Result<()> {
        let (start, end) = match *self {
            PageToken::Single(n) => (n, n),
            PageToken::Span(start, end) => (start, end),
        };

        if start == 0 {
            bail!("Page numbers must be >= 1");
        }

        if end > total_pages {
            bail!("Page {} exceeds total pages {}", end, total_pages);
        }

        Ok(())
    }

    fn covered(&self) -> std::ops::RangeInclusive<u32> {
        match *self {
            PageToken::Single(n) => n..=n,
            PageToken::Span(start, end) => start..=end,
        }
    }
}

fn parse_page_number(s: &str) -> Result<u32> {
    let s = s.trim();
    s.parse::<u32>()
        .map_err(|_| anyhow!("Invalid page number: {}", s))
}

/// Parse a comma-separated page expression like "1-5,8,11-12" into the
/// ascending, de-duplicated list of 1-based page numbers it covers.
///
/// Pure function; every token is validated against `total_pages` and the
/// whole expression fails on the first invalid token.
pub fn parse_selection(expr: &str, total_pages: u32) -> Result<Vec<u32>> {
    if expr.trim().is_empty() {
        bail!("No pages specified");
    }

    let mut pages = BTreeSet::new();
    for part in expr.split(',') {
        let token = PageToken::parse(part)?;
        token.validate(total_pages)?;
        pages.extend(token.covered());
    }

    Ok(pages.into_iter().collect())
}
