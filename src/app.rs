use crate::config::Config;
use crate::content::{self, PageContent};
use crate::controller::NavController;
use crate::model::CtaAction;
use crate::style::Theme;
use crate::tracking::LogTracker;
use eframe::egui;
use std::cell::RefCell;
use tracing::warn;

pub struct App {
    pub controller: NavController,
    pub pages: Vec<PageContent>,
    pub theme: Theme,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let pages = content::site_pages();
        let registry = content::build_registry(&pages);
        let menu = content::build_menu(&pages);

        let mut controller = NavController::new(
            registry,
            menu,
            config.nav.default_page.clone(),
            Box::new(LogTracker),
        );
        if config.history.enabled {
            controller.enable_history();
        }

        Self {
            controller,
            pages,
            theme: Theme::from_mode(&config.theme.mode),
        }
    }

    /// Content of whichever page is visible, if any.
    pub(crate) fn visible_content(&self) -> Option<&PageContent> {
        let visible = self.controller.registry().visible_page()?;
        self.pages.iter().find(|p| p.id == visible.id)
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        if !self.controller.history_enabled() {
            return;
        }
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft)) {
            self.controller.go_back();
        }
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight)) {
            self.controller.go_forward();
        }
    }

    fn open_external(&self, href: &str) {
        self.controller.track_resource_click(href);
        if let Err(e) = open::that(href) {
            warn!("Could not open {href}: {e}");
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.theme.visuals());
        self.handle_input(ctx);

        let reset_scroll = self.controller.take_scroll_to_top();

        // Deferred actions; applied after rendering
        let next_navigation = RefCell::new(None::<String>);
        let next_cta = RefCell::new(None::<CtaAction>);
        let next_external = RefCell::new(None::<String>);

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            self.render_nav_bar(ui, &next_navigation);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_page(ui, reset_scroll, &next_cta, &next_external);
        });

        // Apply deferred actions
        if let Some(target) = next_navigation.into_inner() {
            self.controller.navigate_to(&target);
        }
        if let Some(action) = next_cta.into_inner() {
            self.controller.activate(&action);
        }
        if let Some(href) = next_external.into_inner() {
            self.open_external(&href);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_starts_on_configured_default_page() {
        let app = App::new(&Config::default());
        assert_eq!(app.controller.current_page(), "home");
        assert!(app.visible_content().is_some());
        assert!(!app.controller.history_enabled());
    }

    #[test]
    fn test_history_toggle_comes_from_config() {
        let mut config = Config::default();
        config.history.enabled = true;
        let app = App::new(&config);
        assert!(app.controller.history_enabled());
    }

    #[test]
    fn test_every_nav_link_resolves_to_content() {
        let mut app = App::new(&Config::default());
        let targets: Vec<String> = app
            .controller
            .menu()
            .iter()
            .map(|l| l.target.clone())
            .collect();
        for target in targets {
            app.controller.navigate_to(&target);
            assert!(app.visible_content().is_some(), "no content for '{target}'");
        }
    }
}
