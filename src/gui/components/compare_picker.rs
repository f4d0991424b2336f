// src/gui/components/compare_picker.rs
//
// Multi-select for the comparison chart: current picks as removable chips,
// plus a filterable checkbox list of every region.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App, regions: &[String]) {
    let mut changed = false;

    ui.horizontal_wrapped(|ui| {
        ui.label("Select Countries:");
        let picked: Vec<String> = app.state.gui.selection.compare.iter().cloned().collect();
        for name in picked {
            if ui.small_button(format!("{name} ✕")).clicked() {
                app.state.gui.selection.compare.remove(&name);
                changed = true;
            }
        }
        if !app.state.gui.selection.compare.is_empty() && ui.button("Clear").clicked() {
            app.state.gui.selection.compare.clear();
            changed = true;
        }
    });

    egui::CollapsingHeader::new("Add / remove countries")
        .id_salt("compare_picker")
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut app.state.gui.compare_filter)
                    .hint_text("Filter…"),
            );
            let needle = app.state.gui.compare_filter.to_lowercase();

            egui::ScrollArea::vertical()
                .id_salt("compare_picker_scroll")
                .max_height(180.0)
                .show(ui, |ui| {
                    for name in regions
                        .iter()
                        .filter(|r| needle.is_empty() || r.to_lowercase().contains(&needle))
                    {
                        let mut on = app.state.gui.selection.compare.contains(name);
                        if ui.checkbox(&mut on, name).changed() {
                            app.state.gui.selection.toggle_compare(name);
                            changed = true;
                        }
                    }
                });
        });

    if changed {
        logf!(
            "UI: Comparison changed ({} regions): {:?}",
            app.state.gui.selection.compare.len(),
            &app.state.gui.selection.compare
        );
        app.rebuild_view();
    }
}
