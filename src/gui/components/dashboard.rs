// src/gui/components/dashboard.rs
//
// Central column, top to bottom: global overview, selected region overview,
// region table, region trends, comparison, cumulative trends, disclaimer.

use eframe::egui::{self, RichText};

use crate::config::consts::DISCLAIMER;
use crate::config::state::Notice;
use crate::gui::app::App;

use super::{charts, compare_picker, data_table, export_bar, metrics};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // The view is rebuilt by the widgets below; draw from a snapshot of it.
    let Some(view) = app.view.clone() else {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            match &app.load_error {
                Some(err) => {
                    ui.heading("Data unavailable");
                    ui.colored_label(ui.visuals().error_fg_color, err);
                }
                None => {
                    ui.heading("Loading data …");
                    ui.add(egui::Spinner::new());
                }
            }
        });
        return;
    };

    ui.heading("Global COVID-19 Overview");
    metrics::draw(ui, &view.global, None);

    if let Some(region) = &view.region {
        ui.add_space(12.0);
        ui.heading(format!("COVID-19 Overview for {}", region.name));
        metrics::draw(ui, &region.totals, Some(&region.name));

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.strong("Filtered Data for Positive New Cases");
            ui.checkbox(&mut app.state.gui.show_table, "Show");
        });
        if app.state.gui.show_table {
            export_bar::draw(ui, app);
            data_table::draw(ui, &region.table);
        }

        ui.add_space(12.0);
        ui.heading(format!("COVID-19 Trends for {}", region.name));
        charts::line_chart(
            ui,
            "daily_cases",
            &region.daily_cases.label,
            "new_cases",
            std::slice::from_ref(&region.daily_cases),
        );
        charts::line_chart(
            ui,
            "daily_vaccinations",
            &region.daily_vaccinations.label,
            "new_vaccinations",
            std::slice::from_ref(&region.daily_vaccinations),
        );
    }

    ui.add_space(12.0);
    ui.heading("Compare COVID-19 Cases Between Countries");
    compare_picker::draw(ui, app, &view.regions);
    if view.notices.contains(&Notice::EmptySelection) {
        ui.label(RichText::new(Notice::EmptySelection.to_string()).weak());
    }
    charts::line_chart(
        ui,
        "comparison",
        "Daily New Cases Comparison",
        "new_cases",
        &view.comparison,
    );

    ui.add_space(12.0);
    ui.heading("Global COVID-19 Cumulative Trends");
    charts::line_chart(
        ui,
        "cumulative",
        "Cumulative Global Trends in Cases, Deaths, and Vaccinations",
        "Cumulative Count",
        &view.cumulative_lines,
    );

    ui.add_space(12.0);
    ui.label(RichText::new(DISCLAIMER).italics().weak());
}
