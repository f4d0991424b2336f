// src/aggregate.rs
//! Totals and time series computed from the filtered rows.
//!
//! All functions are pure and recomputed per render. Missing metric values
//! count as zero when summing; only the new-cases filter drops rows.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::data::{Metric, Observation};
use crate::filter::FilteredDataset;
use crate::regions::rows_for_regions;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub cases: i64,
    pub deaths: i64,
    pub vaccinations: i64,
}

impl Totals {
    fn add(&mut self, row: &Observation) {
        self.cases = self.cases.saturating_add(row.new_cases.unwrap_or(0));
        self.deaths = self.deaths.saturating_add(row.new_deaths.unwrap_or(0));
        self.vaccinations = self
            .vaccinations
            .saturating_add(row.new_vaccinations.unwrap_or(0));
    }

    fn accumulate(&mut self, other: &Totals) {
        self.cases = self.cases.saturating_add(other.cases);
        self.deaths = self.deaths.saturating_add(other.deaths);
        self.vaccinations = self.vaccinations.saturating_add(other.vaccinations);
    }

    pub fn get(&self, m: Metric) -> i64 {
        match m {
            Metric::Cases => self.cases,
            Metric::Deaths => self.deaths,
            Metric::Vaccinations => self.vaccinations,
        }
    }
}

/// Sum each metric over `rows`. Empty input → all zeros.
pub fn region_totals<'a, I>(rows: I) -> Totals
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut t = Totals::default();
    for r in rows {
        t.add(r);
    }
    t
}

/// Totals across every region.
pub fn global_totals(ds: &FilteredDataset) -> Totals {
    region_totals(ds.rows())
}

/// Running totals across all regions at one date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub cases: i64,
    pub deaths: i64,
    pub vaccinations: i64,
}

/// Sum per date across regions, order by date, then prefix-sum.
/// One point per distinct date; missing dates are not filled in.
pub fn cumulative_global(ds: &FilteredDataset) -> Vec<CumulativePoint> {
    let mut per_day: BTreeMap<NaiveDate, Totals> = BTreeMap::new();
    for r in ds.rows() {
        per_day.entry(r.date).or_default().add(r);
    }

    let mut running = Totals::default();
    per_day
        .into_iter()
        .map(|(date, day)| {
            running.accumulate(&day);
            CumulativePoint {
                date,
                cases: running.cases,
                deaths: running.deaths,
                vaccinations: running.vaccinations,
            }
        })
        .collect()
}

/// A labelled line: date-ordered `(date, value)` points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(NaiveDate, i64)>,
}

impl Series {
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}

/// One point per row that has a value for `metric`, sorted by date (stable).
pub fn daily_series<'a, I>(rows: I, metric: Metric, label: impl Into<String>) -> Series
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut points: Vec<(NaiveDate, i64)> = rows
        .into_iter()
        .filter_map(|r| r.metric(metric).map(|v| (r.date, v)))
        .collect();
    points.sort_by_key(|(d, _)| *d);
    Series { label: label.into(), points }
}

/// New-cases line per selected region that has data, in region order.
pub fn comparison_series(ds: &FilteredDataset, regions: &BTreeSet<String>) -> Vec<Series> {
    let mut by_region: BTreeMap<&str, Vec<&Observation>> = BTreeMap::new();
    for r in rows_for_regions(ds, regions) {
        by_region.entry(r.location.as_str()).or_default().push(r);
    }
    by_region
        .into_iter()
        .map(|(name, rows)| daily_series(rows, Metric::Cases, name))
        .collect()
}

/// Split the cumulative table into one line per metric.
pub fn cumulative_series(points: &[CumulativePoint]) -> Vec<Series> {
    Metric::ALL
        .iter()
        .map(|&m| Series {
            label: m.column().to_string(),
            points: points
                .iter()
                .map(|p| {
                    let v = match m {
                        Metric::Cases => p.cases,
                        Metric::Deaths => p.deaths,
                        Metric::Vaccinations => p.vaccinations,
                    };
                    (p.date, v)
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::filter::filter_positive_cases;
    use crate::regions::rows_for_region;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, day).unwrap()
    }

    fn example() -> FilteredDataset {
        filter_positive_cases(&Dataset::from_rows(vec![
            Observation::new("Canada", d(1), Some(10), Some(1), Some(0)),
            Observation::new("Canada", d(2), Some(20), Some(2), Some(5)),
            Observation::new("USA", d(1), Some(5), Some(0), Some(0)),
        ]))
    }

    #[test]
    fn totals_of_nothing_are_zero() {
        assert_eq!(region_totals(std::iter::empty()), Totals::default());
    }

    #[test]
    fn region_totals_match_example() {
        let ds = example();
        let t = region_totals(rows_for_region(&ds, "Canada"));
        assert_eq!(t, Totals { cases: 30, deaths: 3, vaccinations: 5 });
        assert_eq!(global_totals(&ds).cases, 35);
    }

    #[test]
    fn nulls_count_as_zero() {
        let rows = [Observation::new("X", d(1), None, None, Some(4))];
        assert_eq!(region_totals(&rows), Totals { cases: 0, deaths: 0, vaccinations: 4 });
    }

    #[test]
    fn cumulative_matches_example() {
        let got = cumulative_global(&example());
        assert_eq!(
            got,
            vec![
                CumulativePoint { date: d(1), cases: 15, deaths: 1, vaccinations: 0 },
                CumulativePoint { date: d(2), cases: 35, deaths: 3, vaccinations: 5 },
            ]
        );
    }

    #[test]
    fn cumulative_orders_dates_and_skips_gaps() {
        let ds = filter_positive_cases(&Dataset::from_rows(vec![
            Observation::new("A", d(9), Some(1), None, None),
            Observation::new("B", d(3), Some(2), Some(1), None),
            Observation::new("A", d(3), Some(4), None, Some(2)),
        ]));
        let got = cumulative_global(&ds);
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].date, d(3));
        assert_eq!((got[0].cases, got[1].cases), (6, 7));
        assert!(got.windows(2).all(|w| w[0].deaths <= w[1].deaths));
    }

    #[test]
    fn daily_series_skips_missing_values() {
        let rows = [
            Observation::new("A", d(2), Some(1), None, Some(3)),
            Observation::new("A", d(1), Some(1), None, None),
        ];
        let s = daily_series(&rows, Metric::Vaccinations, "A");
        assert_eq!(s.points, vec![(d(2), 3)]);
        let c = daily_series(&rows, Metric::Cases, "A");
        assert_eq!(c.points, vec![(d(1), 1), (d(2), 1)]);
    }

    #[test]
    fn comparison_one_line_per_present_region() {
        let ds = example();
        let pick: BTreeSet<String> = ["USA", "Canada", "Mars"].iter().map(|s| s.to_string()).collect();
        let lines = comparison_series(&ds, &pick);
        let labels: Vec<&str> = lines.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Canada", "USA"]);
        assert!(comparison_series(&ds, &BTreeSet::new()).is_empty());
    }

    #[test]
    fn cumulative_series_has_three_lines() {
        let lines = cumulative_series(&cumulative_global(&example()));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].points.last(), Some(&(d(2), 5)));
    }
}
