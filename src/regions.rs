// src/regions.rs
//! Region lookups over the filtered data: the selector list, the default
//! pick, and per-region row slices for tables and charts.

use std::collections::{BTreeSet, HashSet};

use crate::config::consts::DEFAULT_REGION;
use crate::data::Observation;
use crate::filter::FilteredDataset;

/// Every region name once, sorted lexicographically.
pub fn distinct_regions(ds: &FilteredDataset) -> Vec<String> {
    let set: BTreeSet<&str> = ds.rows().iter().map(|r| r.location.as_str()).collect();
    set.into_iter().map(str::to_string).collect()
}

/// "Canada" if the data has it.
pub fn default_region(regions: &[String]) -> Option<String> {
    regions.iter().find(|r| *r == DEFAULT_REGION).cloned()
}

/// `default_region`, else the first region alphabetically.
pub fn fallback_region(regions: &[String]) -> Option<String> {
    default_region(regions).or_else(|| regions.iter().min().cloned())
}

/// Exact-match rows for one region, source order.
pub fn rows_for_region<'a>(ds: &'a FilteredDataset, region: &str) -> Vec<&'a Observation> {
    ds.rows().iter().filter(|r| r.location == region).collect()
}

/// Rows for any of `regions`, source order.
pub fn rows_for_regions<'a>(
    ds: &'a FilteredDataset,
    regions: &BTreeSet<String>,
) -> Vec<&'a Observation> {
    if regions.is_empty() {
        return Vec::new();
    }
    let wanted: HashSet<&str> = regions.iter().map(String::as_str).collect();
    ds.rows()
        .iter()
        .filter(|r| wanted.contains(r.location.as_str()))
        .collect()
}
