// tests/selection_view.rs
//
// Selection changes re-render without touching the source.
//
use std::collections::BTreeSet;

use chrono::NaiveDate;
use covid_dash::config::state::{Notice, Selection};
use covid_dash::data::{Dataset, Observation};
use covid_dash::filter::filter_positive_cases;
use covid_dash::view::render;

fn obs(loc: &str, day: u32, cases: i64) -> Observation {
    let date = NaiveDate::from_ymd_opt(2022, 3, day).unwrap();
    Observation::new(loc, date, Some(cases), None, None)
}

fn data() -> covid_dash::filter::FilteredDataset {
    filter_positive_cases(&Dataset::from_rows(vec![
        obs("Canada", 2, 4),
        obs("Canada", 1, 6),
        obs("France", 1, 9),
        obs("Japan", 1, 0),
        obs("Japan", 2, 3),
    ]))
}

#[test]
fn switching_region_changes_only_region_block() {
    let ds = data();
    let a = render(&ds, &Selection::new("Canada", ["France".to_string()]));
    let b = render(&ds, &Selection::new("Japan", ["France".to_string()]));

    assert_eq!(a.global, b.global);
    assert_eq!(a.cumulative, b.cumulative);
    assert_eq!(a.comparison, b.comparison);

    let ra = a.region.unwrap();
    let rb = b.region.unwrap();
    assert_eq!(ra.totals.cases, 10);
    assert_eq!(rb.totals.cases, 3);
    // chart points are date-ordered even when the feed is not
    assert!(ra.daily_cases.points.windows(2).all(|w| w[0].0 <= w[1].0));
    assert_eq!(ra.daily_cases.label, "Daily New Cases in Canada");
}

#[test]
fn comparison_follows_selected_set() {
    let ds = data();
    let mut sel = Selection::new("Canada", Vec::new());
    sel.toggle_compare("Japan");
    sel.toggle_compare("Canada");

    let v = render(&ds, &sel);
    let labels: Vec<&str> = v.comparison.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["Canada", "Japan"]);

    sel.toggle_compare("Japan");
    let v = render(&ds, &sel);
    assert_eq!(v.comparison.len(), 1);
}

#[test]
fn empty_comparison_renders_no_lines() {
    let ds = data();
    let sel = Selection { region: Some("France".into()), compare: BTreeSet::new() };
    let v = render(&ds, &sel);

    assert!(v.comparison.is_empty());
    assert_eq!(v.notices, vec![Notice::EmptySelection]);
    assert_eq!(v.region.unwrap().name, "France");
}

#[test]
fn unknown_names_are_clamped_and_reported() {
    let ds = data();
    let sel = Selection::new("Atlantis", ["Japan".to_string(), "Narnia".to_string()]);
    let v = render(&ds, &sel);

    assert_eq!(v.selection.region.as_deref(), Some("Canada"));
    assert_eq!(v.selection.compare.len(), 1);
    assert!(v.notices.contains(&Notice::UnknownRegion("Atlantis".into())));
    assert!(v.notices.contains(&Notice::UnknownRegion("Narnia".into())));
    assert!(!v.notices.contains(&Notice::EmptySelection));
}

#[test]
fn region_list_excludes_regions_with_no_positive_days() {
    let ds = filter_positive_cases(&Dataset::from_rows(vec![
        obs("Canada", 1, 1),
        obs("Tuvalu", 1, 0),
    ]));
    let v = render(&ds, &Selection::default());
    assert_eq!(v.regions, vec!["Canada".to_string()]);
}
