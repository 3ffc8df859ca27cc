use std::collections::BTreeSet;

/// The set of currently selected 1-based page numbers.
///
/// Both input surfaces (a typed page expression and interactive per-page
/// toggles) mutate their document's selection exclusively through this type,
/// so the textual rendering and the toggle state can never disagree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pages: BTreeSet<u32>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current selection and install the given pages.
    pub fn replace_with<I: IntoIterator<Item = u32>>(&mut self, pages: I) {
        self.pages = pages.into_iter().collect();
    }

    /// Add the page if absent, remove it if present. Returns whether the
    /// page is selected afterwards.
    pub fn toggle(&mut self, page: u32) -> bool {
        if self.pages.remove(&page) {
            false
        } else {
            self.pages.insert(page);
            true
        }
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }

    pub fn contains(&self, page: u32) -> bool {
        self.pages.contains(&page)
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Selected pages in ascending order.
    pub fn pages(&self) -> Vec<u32> {
        self.pages.iter().copied().collect()
    }

    /// Render the selection as a comma-joined ascending list ("1,2,3"),
    /// the form suitable for redisplay in a page-expression field.
    pub fn to_expression(&self) -> String {
        let parts: Vec<String> = self.pages.iter().map(|p| p.to_string()).collect();
        parts.join(",")
    }
}
