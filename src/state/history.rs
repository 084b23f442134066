// Session history - back/forward support over visited page ids

/// Linear history of visited pages with a cursor, for back/forward
/// navigation. Pushing while the cursor is not at the end drops the forward
/// entries, matching browser behavior.
pub struct NavHistory {
    entries: Vec<String>,
    index: usize,
}

impl NavHistory {
    pub fn new(start_page: impl Into<String>) -> Self {
        Self {
            entries: vec![start_page.into()],
            index: 0,
        }
    }

    pub fn push(&mut self, page_id: impl Into<String>) {
        // Remove any forward history when navigating to a new page
        self.entries.truncate(self.index + 1);
        self.entries.push(page_id.into());
        self.index += 1;
    }

    pub fn go_back(&mut self) -> Option<&str> {
        if self.index > 0 {
            self.index -= 1;
            Some(&self.entries[self.index])
        } else {
            None
        }
    }

    pub fn go_forward(&mut self) -> Option<&str> {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            Some(&self.entries[self.index])
        } else {
            None
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_and_forward() {
        let mut history = NavHistory::new("home");
        history.push("about");
        history.push("services");

        assert_eq!(history.go_back(), Some("about"));
        assert_eq!(history.go_back(), Some("home"));
        assert_eq!(history.go_back(), None);
        assert_eq!(history.go_forward(), Some("about"));
        assert_eq!(history.go_forward(), Some("services"));
        assert_eq!(history.go_forward(), None);
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = NavHistory::new("home");
        history.push("about");
        history.push("services");
        history.go_back();
        history.go_back();

        history.push("contact");
        assert_eq!(history.current(), "contact");
        assert_eq!(history.len(), 2);
        assert_eq!(history.go_forward(), None);
    }
}
