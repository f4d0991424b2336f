// src/gui/actions/copy.rs
use eframe::egui;

use crate::{export, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(table) = super::current_table(app) else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    match export::to_export_string(table, &app.state.options.export) {
        Ok(txt) => {
            logf!("Copy: rows={}, headers={}", table.nrows(), table.ncols());
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
