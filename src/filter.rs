// src/filter.rs
//! The positive-new-cases filter and the type it produces.
//!
//! Everything downstream of the loader (selectors, totals, charts, table)
//! reads a `FilteredDataset`, never the raw `Dataset`.

use std::sync::Arc;

use crate::data::{Dataset, Observation};

/// Rows of a `Dataset` with `new_cases > 0`, in source order.
/// Only the filter stage can build one.
#[derive(Clone, Debug, Default)]
pub struct FilteredDataset {
    extra_headers: Arc<[String]>,
    rows: Vec<Observation>,
}

impl FilteredDataset {
    pub fn rows(&self) -> &[Observation] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn extra_headers(&self) -> &Arc<[String]> { &self.extra_headers }

    /// Apply the filter again. Always equal to `self`.
    pub fn refilter(&self) -> FilteredDataset {
        FilteredDataset {
            extra_headers: self.extra_headers.clone(),
            rows: keep_positive(&self.rows),
        }
    }
}

#[inline]
pub fn is_positive_case(row: &Observation) -> bool {
    matches!(row.new_cases, Some(n) if n > 0)
}

fn keep_positive(rows: &[Observation]) -> Vec<Observation> {
    rows.iter().filter(|r| is_positive_case(r)).cloned().collect()
}

/// Keep a row iff `new_cases` is present and strictly positive.
/// Missing counts are dropped, not read as zero.
pub fn filter_positive_cases(ds: &Dataset) -> FilteredDataset {
    let rows = keep_positive(ds.rows());
    logd!("Filter: kept {} of {} rows", rows.len(), ds.len());
    FilteredDataset { extra_headers: ds.extra_headers().clone(), rows }
}
