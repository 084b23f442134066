// Page registry - the fixed set of named page sections and their visibility

/// A single page section. `visible` is the only field that mutates after
/// startup; the id/title pair is fixed for the session.
#[derive(Clone, Debug)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub visible: bool,
}

impl Page {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            visible: false,
        }
    }
}

/// Ordered collection of pages, populated once at startup.
///
/// Invariant: at most one page is visible at any time. Zero visible pages is
/// a valid degraded state (nothing shown), not an error.
pub struct PageRegistry {
    pages: Vec<Page>,
}

impl PageRegistry {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    pub fn hide_all(&mut self) {
        for page in &mut self.pages {
            page.visible = false;
        }
    }

    /// Makes the page with the given id the only visible one. Returns false
    /// when no page matches; the caller decides what that means.
    pub fn show(&mut self, id: &str) -> bool {
        self.hide_all();
        match self.pages.iter_mut().find(|p| p.id == id) {
            Some(page) => {
                page.visible = true;
                true
            }
            None => false,
        }
    }

    pub fn visible_page(&self) -> Option<&Page> {
        self.pages.iter().find(|p| p.visible)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.pages.iter().any(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PageRegistry {
        PageRegistry::new(vec![
            Page::new("home", "Home"),
            Page::new("about", "About"),
            Page::new("services", "Services"),
        ])
    }

    #[test]
    fn test_show_makes_single_page_visible() {
        let mut reg = registry();
        assert!(reg.show("about"));
        let visible: Vec<_> = reg.iter().filter(|p| p.visible).collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "about");
    }

    #[test]
    fn test_show_replaces_previous_page() {
        let mut reg = registry();
        reg.show("home");
        reg.show("services");
        assert_eq!(reg.visible_page().map(|p| p.id.as_str()), Some("services"));
        assert_eq!(reg.iter().filter(|p| p.visible).count(), 1);
    }

    #[test]
    fn test_show_unknown_id_hides_everything() {
        let mut reg = registry();
        reg.show("home");
        assert!(!reg.show("does-not-exist"));
        assert!(reg.visible_page().is_none());
    }

    #[test]
    fn test_contains() {
        let reg = registry();
        assert!(reg.contains("services"));
        assert!(!reg.contains("blog"));
    }
}
