// src/gui/actions/export.rs
use crate::{export, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let status_msg = match super::current_table(app) {
        None => {
            logd!("Export: Clicked, but there's nothing to export");
            "Nothing to export".to_string()
        }
        Some(table) => match export::write_export(table, &app.state.options.export) {
            Ok(path) => format!("Exported {} rows → {}", table.nrows(), path.display()),
            Err(e) => {
                loge!("Export: Error: {}", e);
                format!("Export error: {e}")
            }
        },
    };

    app.status(status_msg);
}
