// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,load}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod load;    // src/gui/actions/load.rs

pub use copy::copy;
pub use export::export;
pub use load::{poll_load, start_load};

use crate::{gui::app::App, table::TableData};

/// The table Copy/Export act on: the selected region's filtered rows.
#[inline]
pub(super) fn current_table(app: &App) -> Option<&TableData> {
    app.view
        .as_ref()
        .and_then(|v| v.region.as_ref())
        .map(|r| &r.table)
        .filter(|t| !t.is_empty())
}
