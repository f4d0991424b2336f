// src/gui/components/data_table.rs
//
// Draws the selected region's filtered rows. Purely a view over TableData.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::table::TableData;

const ROW_H: f32 = 20.0;
const MAX_H: f32 = 320.0;

pub fn draw(ui: &mut egui::Ui, table: &TableData) {
    if table.is_empty() {
        ui.label("No rows with positive new cases for this region.");
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let cols = table.ncols();

    egui::ScrollArea::horizontal()
        .id_salt("region_table_hscroll")
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(MAX_H)
                .id_salt("region_table");

            for ci in 0..cols {
                let w = match ci {
                    0 => 140.0,
                    1 => 90.0,
                    _ if table.is_numeric_col(ci) => 110.0,
                    _ => 80.0,
                };
                builder = builder.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            builder
                .header(24.0, |mut header| {
                    for h in &table.headers {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, table.nrows(), |mut row| {
                        let Some(data) = table.rows.get(row.index()) else { return };
                        for (ci, cell) in data.iter().enumerate() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if table.is_numeric_col(ci) {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                        ui.label(cell);
                                    });
                                } else {
                                    ui.label(cell);
                                }
                            });
                        }
                    });
                });
        });
}
