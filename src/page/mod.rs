//! # Pages and Page Sets
//!
//! A benchmark measures a set of pages. Pages can be individually
//! disabled, and smoke runs narrow a set to its first enabled page so
//! that one representative page exercises the whole pipeline.

/// A single page a measurement visits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Display name of the page.
    pub name: String,

    /// Location the page is served from.
    pub url: String,

    /// Whether the page is excluded from runs.
    pub disabled: bool,

    /// Whether the measurement should skip scripted wait points.
    pub skip_waits: bool,
}

impl Page {
    /// Creates an enabled page.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            disabled: false,
            skip_waits: false,
        }
    }

    /// Marks the page as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Marks the page to skip scripted wait points.
    #[must_use]
    pub fn skip_waits(mut self) -> Self {
        self.skip_waits = true;
        self
    }
}

/// An ordered collection of pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSet {
    pages: Vec<Page>,
}

impl PageSet {
    /// Creates an empty page set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a page set from a list of pages.
    #[must_use]
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Appends a page.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Returns all pages in order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Iterates over pages that are not disabled.
    pub fn enabled_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|page| !page.disabled)
    }

    /// Narrows the set to its first enabled page.
    ///
    /// The surviving page is marked to skip scripted wait points so a
    /// single pass stays fast. A set with no enabled page is returned
    /// unchanged; the caller decides what an empty run means.
    #[must_use]
    pub fn first_enabled(&self) -> PageSet {
        match self.enabled_pages().next() {
            Some(page) => Self {
                pages: vec![page.clone().skip_waits()],
            },
            None => self.clone(),
        }
    }

    /// Returns the number of pages, disabled ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if the set holds no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> PageSet {
        PageSet::from_pages(vec![
            Page::new("intro", "http://test.local/intro").disabled(),
            Page::new("gallery", "http://test.local/gallery"),
            Page::new("checkout", "http://test.local/checkout"),
        ])
    }

    #[test]
    fn test_enabled_pages_skips_disabled() {
        let set = sample_set();
        let names: Vec<&str> = set.enabled_pages().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["gallery", "checkout"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_first_enabled_keeps_one_page() {
        let narrowed = sample_set().first_enabled();
        assert_eq!(narrowed.len(), 1);

        let page = &narrowed.pages()[0];
        assert_eq!(page.name, "gallery");
        assert!(page.skip_waits);
        assert!(!page.disabled);
    }

    #[test]
    fn test_first_enabled_all_disabled_is_unchanged() {
        let set = PageSet::from_pages(vec![
            Page::new("a", "http://test.local/a").disabled(),
            Page::new("b", "http://test.local/b").disabled(),
        ]);
        let narrowed = set.first_enabled();
        assert_eq!(narrowed, set);
        assert_eq!(narrowed.enabled_pages().count(), 0);
    }

    #[test]
    fn test_first_enabled_empty_set() {
        let set = PageSet::new();
        assert!(set.first_enabled().is_empty());
    }

    #[test]
    fn test_first_enabled_does_not_touch_original() {
        let set = sample_set();
        let _ = set.first_enabled();
        assert!(!set.pages()[1].skip_waits);
    }

    #[test]
    fn test_add_page() {
        let mut set = PageSet::new();
        set.add_page(Page::new("only", "http://test.local/only"));
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }
}
