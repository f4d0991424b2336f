// src/table.rs
//! TableData: string table handed to the GUI grid and to Copy/Export.
//!
//! The typed columns come first (location, date, the three counts), then the
//! passthrough columns in feed order. Missing counts render as empty cells.

use crate::config::consts::*;
use crate::data::Observation;

/// Leading columns whose cells are numbers (right/centre aligned in the grid).
pub const NUMERIC_COLS: std::ops::Range<usize> = 2..5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn with(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn nrows(&self) -> usize { self.rows.len() }
    pub fn ncols(&self) -> usize { self.headers.len() }

    pub fn is_numeric_col(&self, ci: usize) -> bool { NUMERIC_COLS.contains(&ci) }

    pub fn from_observations<'a, I>(extra_headers: &[String], rows: I) -> Self
    where
        I: IntoIterator<Item = &'a Observation>,
    {
        let mut headers: Vec<String> = [
            COL_LOCATION,
            COL_DATE,
            COL_NEW_CASES,
            COL_NEW_DEATHS,
            COL_NEW_VACCINATIONS,
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        headers.extend(extra_headers.iter().cloned());

        let rows = rows
            .into_iter()
            .map(|r| {
                let mut out = Vec::with_capacity(headers.len());
                out.push(r.location.clone());
                out.push(r.date.format(DATE_FORMAT).to_string());
                for v in [r.new_cases, r.new_deaths, r.new_vaccinations] {
                    out.push(v.map(|n| n.to_string()).unwrap_or_default());
                }
                out.extend(r.extra.iter().map(|c| c.to_string()));
                out
            })
            .collect();

        Self { headers, rows }
    }
}
