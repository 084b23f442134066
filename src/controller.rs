// Navigation controller - keeps page visibility, the menu highlight, and the
// optional session history in sync

use crate::model::{CtaAction, HistorySignal};
use crate::state::{NavHistory, NavMenu, PageRegistry};
use crate::tracking::LinkTracker;

/// Owns all navigation state. The UI layer feeds events in (link clicks,
/// CTA activations, back/forward) and renders whatever this leaves behind;
/// nothing here touches the UI directly, so the whole thing runs headless in
/// tests.
pub struct NavController {
    registry: PageRegistry,
    menu: NavMenu,
    history: Option<NavHistory>,
    tracker: Box<dyn LinkTracker>,
    default_page: String,
    scroll_to_top: bool,
}

impl NavController {
    pub fn new(
        registry: PageRegistry,
        menu: NavMenu,
        default_page: impl Into<String>,
        tracker: Box<dyn LinkTracker>,
    ) -> Self {
        let default_page = default_page.into();
        let mut controller = Self {
            registry,
            menu,
            history: None,
            tracker,
            default_page: default_page.clone(),
            scroll_to_top: false,
        };
        controller.navigate_to(&default_page);
        controller.scroll_to_top = false;
        controller
    }

    /// Turns on the back/forward history, seeded with the current page.
    /// Off by default.
    pub fn enable_history(&mut self) {
        if self.history.is_none() {
            self.history = Some(NavHistory::new(self.current_page()));
        }
    }

    /// Switches to the page with the given id. Any string is accepted: an
    /// unknown id leaves every page hidden and every link inactive, which is
    /// a valid state, not an error. Idempotent.
    pub fn navigate_to(&mut self, page_id: &str) {
        let found = self.registry.show(page_id);
        if found {
            // Back to the top of the viewport on every page switch
            self.scroll_to_top = true;
        }
        self.menu.set_active(page_id);

        if found {
            if let Some(history) = &mut self.history {
                if history.current() != page_id {
                    history.push(page_id);
                }
            }
        }
    }

    /// The id of the visible page, or the home page id when nothing is
    /// visible.
    pub fn current_page(&self) -> &str {
        self.registry
            .visible_page()
            .map(|p| p.id.as_str())
            .unwrap_or(&self.default_page)
    }

    pub fn is_page_active(&self, page_id: &str) -> bool {
        self.current_page() == page_id
    }

    /// Replays a history navigation signal: same visibility and highlight
    /// effect as `navigate_to`, but never pushes a history entry, so
    /// back/forward cannot spawn duplicates. A signal without a page does
    /// nothing.
    pub fn handle_history_signal(&mut self, signal: &HistorySignal) {
        let Some(page_id) = signal.page.as_deref() else {
            return;
        };
        if self.registry.show(page_id) {
            self.scroll_to_top = true;
        }
        self.menu.set_active(page_id);
    }

    pub fn go_back(&mut self) {
        let signal = match self.history.as_mut().and_then(|h| h.go_back()) {
            Some(page) => HistorySignal::for_page(page),
            None => return,
        };
        self.handle_history_signal(&signal);
    }

    pub fn go_forward(&mut self) {
        let signal = match self.history.as_mut().and_then(|h| h.go_forward()) {
            Some(page) => HistorySignal::for_page(page),
            None => return,
        };
        self.handle_history_signal(&signal);
    }

    pub fn history_enabled(&self) -> bool {
        self.history.is_some()
    }

    /// Dispatch for call-to-action controls. A `None` action was malformed
    /// at construction time and activating it is a no-op.
    pub fn activate(&mut self, action: &CtaAction) {
        if let CtaAction::Navigate(page_id) = action {
            let page_id = page_id.clone();
            self.navigate_to(&page_id);
        }
    }

    /// Records an outbound resource click. Fragment destinations (in-page
    /// anchors) are not tracked. The caller still opens the link; tracking
    /// never interferes with it.
    pub fn track_resource_click(&self, href: &str) {
        if !href.starts_with('#') {
            self.tracker.record(href);
        }
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn menu(&self) -> &NavMenu {
        &self.menu
    }

    /// One-shot flag set on every successful page switch; the view consumes
    /// it to reset the scroll position.
    pub fn take_scroll_to_top(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }
}
