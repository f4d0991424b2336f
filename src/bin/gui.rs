// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use covid_dash::{
    config::consts::{APP_TITLE, WINDOW_H, WINDOW_W},
    gui, log,
};
use eframe::egui::ViewportBuilder;

fn main() {
    if let Err(e) = log::init() {
        eprintln!("Logging disabled: {e}");
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
