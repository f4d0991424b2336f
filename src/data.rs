// src/data.rs
//
// Canonical feed data.
//
// - Observation: one (region, date) row; the five columns the pipeline reads
//                are typed, everything else rides along untouched.
// - Dataset:     every row with a parseable date, in source order.
//                Immutable once built; shared behind an Arc by the store.
//
// The filtered view lives in src/filter.rs as its own type.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::consts::*;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    Cases,
    Deaths,
    Vaccinations,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Cases, Metric::Deaths, Metric::Vaccinations];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Cases => "Cases",
            Metric::Deaths => "Deaths",
            Metric::Vaccinations => "Vaccinations",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Metric::Cases => COL_NEW_CASES,
            Metric::Deaths => COL_NEW_DEATHS,
            Metric::Vaccinations => COL_NEW_VACCINATIONS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub location: String,
    pub date: NaiveDate,
    pub new_cases: Option<i64>,
    pub new_deaths: Option<i64>,
    pub new_vaccinations: Option<i64>,
    /// Passthrough cells, aligned with `Dataset::extra_headers`.
    pub extra: Arc<[Box<str>]>,
}

impl Observation {
    pub fn new(
        location: impl Into<String>,
        date: NaiveDate,
        new_cases: Option<i64>,
        new_deaths: Option<i64>,
        new_vaccinations: Option<i64>,
    ) -> Self {
        Self {
            location: location.into(),
            date,
            new_cases,
            new_deaths,
            new_vaccinations,
            extra: Arc::from(Vec::<Box<str>>::new()),
        }
    }

    #[inline]
    pub fn metric(&self, m: Metric) -> Option<i64> {
        match m {
            Metric::Cases => self.new_cases,
            Metric::Deaths => self.new_deaths,
            Metric::Vaccinations => self.new_vaccinations,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    extra_headers: Arc<[String]>,
    rows: Vec<Observation>,
    skipped: usize,
}

impl Dataset {
    /// Build from already-typed rows (no passthrough columns).
    pub fn from_rows(rows: Vec<Observation>) -> Self {
        Self { extra_headers: Arc::from(Vec::<String>::new()), rows, skipped: 0 }
    }

    pub fn rows(&self) -> &[Observation] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Names of the passthrough columns, in source order.
    pub fn extra_headers(&self) -> &Arc<[String]> { &self.extra_headers }

    /// Records dropped at parse time (bad date or malformed record).
    pub fn skipped(&self) -> usize { self.skipped }
}

/// Parse the feed. `origin` only decorates error messages.
///
/// Fails when `location`, `date` or `new_cases` is missing, or when the body
/// has records but none of them carries a parseable date. Individual records
/// with a bad date are dropped.
pub fn parse_csv(text: &str, origin: &str) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = rdr.headers().map_err(|e| Error::unavailable(origin, e))?.clone();
    let find = |name: &str| headers.iter().position(|h| h.trim() == name);
    let require = |name: &str| {
        find(name).ok_or_else(|| Error::unavailable(origin, format!("missing column '{name}'")))
    };

    let loc_ix = require(COL_LOCATION)?;
    let date_ix = require(COL_DATE)?;
    let cases_ix = require(COL_NEW_CASES)?;
    let deaths_ix = find(COL_NEW_DEATHS);
    let vacc_ix = find(COL_NEW_VACCINATIONS);

    let typed = [Some(loc_ix), Some(date_ix), Some(cases_ix), deaths_ix, vacc_ix];
    let extra_ix: Vec<usize> = (0..headers.len())
        .filter(|i| !typed.contains(&Some(*i)))
        .collect();
    let extra_headers: Arc<[String]> = extra_ix
        .iter()
        .map(|&i| headers[i].to_string())
        .collect();

    let mut rows = Vec::new();
    let mut records = 0usize;
    let mut skipped = 0usize;

    for result in rdr.records() {
        records += 1;
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                logd!("Parse: skipping malformed record {}: {}", records, e);
                skipped += 1;
                continue;
            }
        };

        let Some(date) = rec.get(date_ix).and_then(parse_date) else {
            skipped += 1;
            continue;
        };

        let cell = |ix: Option<usize>| ix.and_then(|i| rec.get(i)).and_then(parse_count);

        rows.push(Observation {
            location: rec.get(loc_ix).unwrap_or_default().trim().to_string(),
            date,
            new_cases: cell(Some(cases_ix)),
            new_deaths: cell(deaths_ix),
            new_vaccinations: cell(vacc_ix),
            extra: extra_ix
                .iter()
                .map(|&i| Box::<str>::from(rec.get(i).unwrap_or_default()))
                .collect(),
        });
    }

    if records > 0 && rows.is_empty() {
        return Err(Error::unavailable(
            origin,
            format!("none of {records} records has a parseable '{COL_DATE}'"),
        ));
    }

    logf!(
        "Parse: {} rows kept, {} skipped, {} passthrough columns",
        rows.len(),
        skipped,
        extra_headers.len()
    );

    Ok(Dataset { extra_headers, rows, skipped })
}

/// `YYYY-MM-DD`, tolerating a trailing time component.
pub fn parse_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    NaiveDate::parse_from_str(cell, DATE_FORMAT)
        .ok()
        .or_else(|| cell.get(..10).and_then(|d| NaiveDate::parse_from_str(d, DATE_FORMAT).ok()))
}

/// Lenient count: empty or junk → None, `"12.0"` → 12.
pub fn parse_count(cell: &str) -> Option<i64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    if let Ok(v) = cell.parse::<i64>() {
        return Some(v);
    }
    match cell.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v as i64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = "\
iso_code,continent,location,date,total_cases,new_cases,new_deaths,new_vaccinations
CAN,North America,Canada,2021-01-01,100,10.0,1,
CAN,North America,Canada,not-a-date,110,10,0,
CAN,North America,Canada,2021-01-02,130,20,,5
";

    #[test]
    fn parses_typed_and_passthrough_columns() {
        let ds = parse_csv(FEED, "test").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.skipped(), 1);
        assert_eq!(&ds.extra_headers()[..], ["iso_code", "continent", "total_cases"]);

        let first = &ds.rows()[0];
        assert_eq!(first.location, "Canada");
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(first.new_cases, Some(10));
        assert_eq!(first.new_vaccinations, None);
        assert_eq!(&*first.extra[0], "CAN");

        let second = &ds.rows()[1];
        assert_eq!(second.new_deaths, None);
        assert_eq!(second.new_vaccinations, Some(5));
    }

    #[test]
    fn missing_date_column_fails() {
        let err = parse_csv("location,new_cases\nCanada,1\n", "test").unwrap_err();
        assert!(err.is_data_unavailable());
        assert!(err.to_string().contains("'date'"));
    }

    #[test]
    fn all_dates_bad_fails() {
        let text = "location,date,new_cases\nCanada,soon,1\nCanada,later,2\n";
        assert!(parse_csv(text, "test").unwrap_err().is_data_unavailable());
    }

    #[test]
    fn header_only_is_an_empty_dataset() {
        let ds = parse_csv("location,date,new_cases\n", "test").unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn counts_are_lenient() {
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count(" 7 "), Some(7));
        assert_eq!(parse_count("7.9"), Some(7));
        assert_eq!(parse_count("-3"), Some(-3));
        assert_eq!(parse_count("n/a"), None);
    }

    #[test]
    fn dates_tolerate_time_suffix() {
        assert_eq!(parse_date("2021-03-04 00:00:00"), NaiveDate::from_ymd_opt(2021, 3, 4));
        assert_eq!(parse_date("04/03/2021"), None);
    }
}
