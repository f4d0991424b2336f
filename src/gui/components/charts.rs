// src/gui/components/charts.rs
//
// Line charts over `Series`. X is the day number (days from CE), labelled back
// as ISO dates on the axis.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use eframe::egui;
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints};

use crate::aggregate::Series;
use crate::config::consts::{CHART_HEIGHT, DATE_FORMAT};

fn to_x(d: NaiveDate) -> f64 {
    d.num_days_from_ce() as f64
}

fn fmt_x(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    NaiveDate::from_num_days_from_ce_opt(mark.value.round() as i32)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn points(s: &Series) -> PlotPoints<'static> {
    s.points
        .iter()
        .map(|(d, v)| [to_x(*d), *v as f64])
        .collect::<Vec<[f64; 2]>>()
        .into()
}

/// One or more lines on a shared date axis. An empty `lines` slice draws an
/// empty plot frame.
pub fn line_chart(ui: &mut egui::Ui, id: &str, title: &str, y_label: &str, lines: &[Series]) {
    ui.strong(title);
    Plot::new(id)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .allow_scroll(false)
        .x_axis_formatter(fmt_x)
        .y_axis_label(y_label)
        .show(ui, |plot_ui| {
            for s in lines {
                plot_ui.line(Line::new(s.label.clone(), points(s)));
            }
        });
}
