// src/config/state.rs
use std::collections::BTreeSet;
use std::fmt;

use super::consts::{DEFAULT_COMPARISON, DEFAULT_REGION};
use super::options::AppOptions;
use crate::regions::fallback_region;

/// What the user picked. Plain values; the view layer owns it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Region shown in the per-region overview.
    pub region: Option<String>,
    /// Regions drawn in the comparison chart.
    pub compare: BTreeSet<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            region: Some(DEFAULT_REGION.to_string()),
            compare: DEFAULT_COMPARISON.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Non-fatal selection conditions, surfaced next to the affected widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Nothing selected for comparison; the chart renders empty.
    EmptySelection,
    /// A selected name is not in the loaded data (e.g. after a reload).
    UnknownRegion(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::EmptySelection => write!(f, "No regions selected for comparison"),
            Notice::UnknownRegion(r) => write!(f, "Region not in data: {r}"),
        }
    }
}

impl Selection {
    pub fn new(region: impl Into<String>, compare: impl IntoIterator<Item = String>) -> Self {
        Self { region: Some(region.into()), compare: compare.into_iter().collect() }
    }

    /// Clamp the selection to `regions` (the distinct, sorted region list).
    ///
    /// - unknown single region → default region, else first alphabetically
    /// - unknown comparison members are dropped
    /// - an empty comparison set is reported but kept empty
    pub fn resolve(&mut self, regions: &[String]) -> Vec<Notice> {
        let mut notices = Vec::new();
        let known = |r: &str| regions.iter().any(|x| x == r);

        match self.region.take() {
            Some(r) if known(&r) => self.region = Some(r),
            Some(r) => {
                notices.push(Notice::UnknownRegion(r));
                self.region = fallback_region(regions);
            }
            None => self.region = fallback_region(regions),
        }

        let (keep, dropped): (BTreeSet<String>, BTreeSet<String>) =
            std::mem::take(&mut self.compare)
                .into_iter()
                .partition(|r| known(r));
        notices.extend(dropped.into_iter().map(Notice::UnknownRegion));
        self.compare = keep;

        if self.compare.is_empty() {
            notices.push(Notice::EmptySelection);
        }
        notices
    }

    pub fn toggle_compare(&mut self, region: &str) {
        if !self.compare.remove(region) {
            self.compare.insert(region.to_string());
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub selection: Selection,

    /// Filter text for the comparison picker
    pub compare_filter: String,

    /// Show the per-region table (it can be long)
    pub show_table: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selection: Selection::default(),
            compare_filter: String::new(),
            show_table: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
