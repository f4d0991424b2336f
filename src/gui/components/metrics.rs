// src/gui/components/metrics.rs
//
// Three side-by-side metric cards (cases / deaths / vaccinations).

use eframe::egui::{self, RichText};

use crate::aggregate::Totals;
use crate::data::Metric;
use crate::view::fmt_count;

pub fn draw(ui: &mut egui::Ui, totals: &Totals, suffix: Option<&str>) {
    ui.columns(3, |cols| {
        for (col, m) in cols.iter_mut().zip(Metric::ALL) {
            let title = match suffix {
                Some(s) => format!("Total {} in {}", m.label(), s),
                None => format!("Total {}", m.label()),
            };
            card(col, &title, totals.get(m));
        }
    });
}

fn card(ui: &mut egui::Ui, title: &str, value: i64) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(title).weak());
        ui.label(RichText::new(fmt_count(value)).size(26.0).strong());
    });
}
