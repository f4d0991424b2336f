// src/view.rs
//! The dashboard as data.
//!
//! `render` turns the filtered feed plus the user's selection into a
//! `DashboardView`: every number, table and line a front-end draws. It is pure,
//! so the GUI calls it whenever the selection or the loaded data changes and
//! the CLI calls it once.

use crate::aggregate::{
    comparison_series, cumulative_global, cumulative_series, daily_series, global_totals,
    region_totals, CumulativePoint, Series, Totals,
};
use crate::config::state::{Notice, Selection};
use crate::data::Metric;
use crate::filter::FilteredDataset;
use crate::regions::{distinct_regions, rows_for_region};
use crate::table::TableData;

/// Everything shown for the single selected region.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionView {
    pub name: String,
    pub totals: Totals,
    pub table: TableData,
    pub daily_cases: Series,
    pub daily_vaccinations: Series,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    /// Selector contents, sorted.
    pub regions: Vec<String>,
    /// The selection after clamping to `regions`.
    pub selection: Selection,
    pub global: Totals,
    pub region: Option<RegionView>,
    pub comparison: Vec<Series>,
    pub cumulative: Vec<CumulativePoint>,
    /// `cumulative` split into one line per metric.
    pub cumulative_lines: Vec<Series>,
    pub notices: Vec<Notice>,
}

pub fn render(ds: &FilteredDataset, selection: &Selection) -> DashboardView {
    let regions = distinct_regions(ds);

    let mut selection = selection.clone();
    let notices = selection.resolve(&regions);

    let region = selection.region.as_deref().map(|name| {
        let rows = rows_for_region(ds, name);
        RegionView {
            name: name.to_string(),
            totals: region_totals(rows.iter().copied()),
            table: TableData::from_observations(ds.extra_headers(), rows.iter().copied()),
            daily_cases: daily_series(
                rows.iter().copied(),
                Metric::Cases,
                format!("Daily New Cases in {name}"),
            ),
            daily_vaccinations: daily_series(
                rows.iter().copied(),
                Metric::Vaccinations,
                format!("Daily New Vaccinations in {name}"),
            ),
        }
    });

    let cumulative = cumulative_global(ds);
    let cumulative_lines = cumulative_series(&cumulative);

    DashboardView {
        global: global_totals(ds),
        comparison: comparison_series(ds, &selection.compare),
        region,
        cumulative,
        cumulative_lines,
        notices,
        regions,
        selection,
    }
}

/// `1234567` → `"1,234,567"`.
pub fn fmt_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
