// Panel rendering for LifeGuard
// Nav bar, page body, and status bar

use crate::app::App;
use crate::content::PageContent;
use crate::model::CtaAction;
use crate::style;
use eframe::egui;
use std::cell::RefCell;

impl App {
    pub(crate) fn render_nav_bar(
        &self,
        ui: &mut egui::Ui,
        next_navigation: &RefCell<Option<String>>,
    ) {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("LifeGuard")
                    .size(18.0)
                    .strong()
                    .color(style::ACCENT),
            );
            ui.add_space(style::NAV_BAR_SPACING);
            ui.separator();

            let default_color = ui.visuals().text_color();
            for link in self.controller.menu().iter() {
                ui.add_space(style::NAV_BAR_SPACING);
                let label = style::nav_label(&link.label, link.active, default_color);
                let response = ui
                    .add(egui::Label::new(label).sense(egui::Sense::click()))
                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                if response.clicked() {
                    *next_navigation.borrow_mut() = Some(link.target.clone());
                }
            }
        });
        ui.add_space(6.0);
    }

    pub(crate) fn render_page(
        &self,
        ui: &mut egui::Ui,
        reset_scroll: bool,
        next_cta: &RefCell<Option<CtaAction>>,
        next_external: &RefCell<Option<String>>,
    ) {
        let Some(page) = self.visible_content() else {
            // Degraded state: nothing to show. Not an error.
            ui.centered_and_justified(|ui| {
                ui.label("Nothing to show");
            });
            return;
        };

        let mut scroll = egui::ScrollArea::vertical()
            .id_salt("page_scroll")
            .auto_shrink([false, false]);
        if reset_scroll {
            scroll = scroll.scroll_offset(egui::Vec2::ZERO);
        }

        scroll.show(ui, |ui| {
            ui.add_space(style::PAGE_MARGIN);
            ui.label(
                egui::RichText::new(&page.title)
                    .size(style::HERO_TITLE_SIZE)
                    .strong(),
            );
            ui.add_space(style::SECTION_GAP);
            ui.label(&page.intro);

            if !page.ctas.is_empty() {
                ui.add_space(style::SECTION_GAP);
                ui.horizontal(|ui| {
                    for cta in &page.ctas {
                        if ui.button(&cta.label).clicked() {
                            *next_cta.borrow_mut() = Some(cta.action.clone());
                        }
                    }
                });
            }

            for section in &page.sections {
                ui.add_space(style::SECTION_GAP * 1.5);
                ui.label(
                    egui::RichText::new(&section.heading)
                        .size(style::SECTION_HEADING_SIZE)
                        .strong(),
                );
                ui.add_space(4.0);
                ui.label(&section.body);
            }

            if !page.resources.is_empty() {
                ui.add_space(style::SECTION_GAP * 1.5);
                self.render_resource_list(ui, page, next_external);
            }

            ui.add_space(style::PAGE_MARGIN);
        });
    }

    fn render_resource_list(
        &self,
        ui: &mut egui::Ui,
        page: &PageContent,
        next_external: &RefCell<Option<String>>,
    ) {
        use egui_extras::{Column, TableBuilder};

        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(style::RESOURCE_LABEL_WIDTH))
            .column(Column::remainder().clip(true))
            .body(|body| {
                body.rows(style::RESOURCE_ROW_HEIGHT, page.resources.len(), |mut row| {
                    let resource = &page.resources[row.index()];
                    row.col(|ui| {
                        let response = ui
                            .add(
                                egui::Label::new(style::link_label(&resource.label))
                                    .sense(egui::Sense::click()),
                            )
                            .on_hover_text(&resource.href)
                            .on_hover_cursor(egui::CursorIcon::PointingHand);
                        if response.clicked() {
                            *next_external.borrow_mut() = Some(resource.href.clone());
                        }
                    });
                    row.col(|ui| {
                        ui.label(&resource.blurb);
                    });
                });
            });
    }

    pub(crate) fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("Page: {}", self.controller.current_page()));
            if self.controller.history_enabled() {
                ui.separator();
                ui.label("Alt+\u{2190} back / Alt+\u{2192} forward");
            }
        });
    }
}
