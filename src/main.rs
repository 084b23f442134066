mod app;
mod config;
mod content;
mod controller;
mod model;
mod state;
mod style;
mod tracking;
mod view;

use app::App;
use config::Config;
use eframe::egui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    if let Err(e) = Config::create_default() {
        tracing::warn!("Could not write default config: {e}");
    }
    let config = Config::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("LifeGuard"),
        ..Default::default()
    };

    eframe::run_native(
        "LifeGuard",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(&config)))),
    )
}
