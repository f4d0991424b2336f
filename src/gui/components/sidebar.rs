// src/gui/components/sidebar.rs
//
// Left panel: title, attribution, and the region list.
// Clicking a region makes it the selected region and re-renders the dashboard.

use eframe::egui;

use crate::config::consts::{APP_AUTHOR, APP_TITLE, SOURCE_NAME};
use crate::config::options::SourceKind;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading(APP_TITLE);
    ui.label(egui::RichText::new(APP_AUTHOR).weak());
    ui.add_space(4.0);

    ui.label(format!("Data Source: {SOURCE_NAME}"));
    match &app.state.options.source.kind {
        SourceKind::Http(url) => {
            ui.hyperlink_to("Source CSV", url);
        }
        SourceKind::File(path) => {
            ui.label(format!("Source: {}", path.display()));
        }
    }

    if let Some(err) = app.load_error.clone() {
        ui.separator();
        ui.colored_label(ui.visuals().error_fg_color, "Data unavailable");
        ui.label(egui::RichText::new(err).small());
        if ui.add_enabled(!app.running, egui::Button::new("Retry")).clicked() {
            logf!("UI: Retry load");
            actions::start_load(app, ui.ctx());
        }
    }

    if app.data.is_some() && ui.add_enabled(!app.running, egui::Button::new("Reload data")).clicked() {
        logf!("UI: Reload requested");
        app.store.invalidate();
        actions::start_load(app, ui.ctx());
    }

    ui.separator();
    ui.strong("Select Country");

    let Some(view) = app.view.as_ref() else {
        ui.label("Waiting for data …");
        return;
    };

    // Match the scroll bar aesthetics used in the main table
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let current = view.selection.region.clone();
    let mut clicked: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("regions_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for name in &view.regions {
                let is_selected = current.as_deref() == Some(name.as_str());
                let resp = ui.selectable_label(is_selected, name);
                if resp.clicked() && !is_selected {
                    clicked = Some(name.clone());
                }
            }
        });

    if let Some(name) = clicked {
        logf!("UI: Region → {}", name);
        app.state.gui.selection.region = Some(name);
        app.rebuild_view();
    }
}
