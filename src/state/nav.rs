// Navigation menu state - links and the active highlight

/// A menu entry pointing at a page id. `active` mirrors whether the target
/// page is the visible one.
#[derive(Clone, Debug)]
pub struct NavLink {
    pub label: String,
    pub target: String,
    pub active: bool,
}

impl NavLink {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            active: false,
        }
    }
}

/// Ordered set of navigation links, fixed at startup.
///
/// Invariant: the links marked active are exactly those whose target equals
/// the currently shown page id, so at most one link is active per distinct
/// target and none when no link matches.
pub struct NavMenu {
    links: Vec<NavLink>,
}

impl NavMenu {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self { links }
    }

    /// Marks active exactly the links targeting `page_id`. An unknown id
    /// simply clears every highlight.
    pub fn set_active(&mut self, page_id: &str) {
        for link in &mut self.links {
            link.active = link.target == page_id;
        }
    }

    pub fn active_link(&self) -> Option<&NavLink> {
        self.links.iter().find(|l| l.active)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavLink> {
        self.links.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> NavMenu {
        NavMenu::new(vec![
            NavLink::new("Home", "home"),
            NavLink::new("About", "about"),
            NavLink::new("Services", "services"),
        ])
    }

    #[test]
    fn test_set_active_highlights_matching_link() {
        let mut menu = menu();
        menu.set_active("about");
        assert_eq!(menu.active_link().map(|l| l.target.as_str()), Some("about"));
        assert_eq!(menu.iter().filter(|l| l.active).count(), 1);
    }

    #[test]
    fn test_set_active_moves_highlight() {
        let mut menu = menu();
        menu.set_active("home");
        menu.set_active("services");
        let active: Vec<_> = menu.iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].target, "services");
    }

    #[test]
    fn test_set_active_unknown_target_clears_all() {
        let mut menu = menu();
        menu.set_active("home");
        menu.set_active("nowhere");
        assert!(menu.active_link().is_none());
    }
}
