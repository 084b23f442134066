use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }
}

// --- Sizing ---
pub const NAV_BAR_SPACING: f32 = 12.0;
pub const PAGE_MARGIN: f32 = 16.0;
pub const SECTION_GAP: f32 = 10.0;
pub const HERO_TITLE_SIZE: f32 = 26.0;
pub const SECTION_HEADING_SIZE: f32 = 17.0;
pub const RESOURCE_ROW_HEIGHT: f32 = 28.0;
pub const RESOURCE_LABEL_WIDTH: f32 = 240.0;

// --- Colors ---
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);
pub const LINK_COLOR: egui::Color32 = egui::Color32::from_rgb(110, 170, 250);

// --- Helper functions ---

pub fn nav_label(text: &str, active: bool, default_color: egui::Color32) -> egui::RichText {
    let rich = egui::RichText::new(text).size(15.0);
    if active {
        rich.color(ACCENT).strong()
    } else {
        rich.color(default_color)
    }
}

pub fn link_label(text: &str) -> egui::RichText {
    egui::RichText::new(text).color(LINK_COLOR).underline()
}
