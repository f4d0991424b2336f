// tests/cli_report.rs
//
// CLI report rendered into a buffer from a local feed file.
//
use std::fs;
use std::path::PathBuf;

use covid_dash::cli::{parse_args, report};
use covid_dash::source;
use covid_dash::store::DatasetStore;

const FEED: &str = "\
location,date,new_cases,new_deaths,new_vaccinations
Canada,2021-01-01,1200,1,
Canada,2021-01-02,20,2,5
United States,2021-01-01,5,0,
";

fn feed_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("covid_dash_cli_{name}"));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    fs::write(p.join("feed.csv"), FEED).unwrap();
    p
}

fn run(dir: &PathBuf, extra: &[&str]) -> String {
    let mut args = vec!["--file".to_string(), dir.join("feed.csv").to_string_lossy().into_owned()];
    args.extend(extra.iter().map(|s| s.to_string()));
    let params = parse_args(args).unwrap();

    let store = DatasetStore::new(source::from_options(&params.source));
    let mut out = Vec::new();
    report(&store, &params, &mut out, None).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn overview_has_formatted_totals() {
    let dir = feed_dir("overview");
    let out = run(&dir, &[]);
    assert!(out.contains("Global COVID-19 Overview"));
    assert!(out.contains("COVID-19 Overview for Canada"));
    assert!(out.contains("1,225"));
    assert!(out.contains("1,220"));
    assert!(out.contains("Daily New Cases Comparison"));
}

#[test]
fn list_regions_prints_sorted_names_only() {
    let dir = feed_dir("list");
    let out = run(&dir, &["--list-regions"]);
    assert_eq!(out, "Canada\nUnited States\n");
}

#[test]
fn cumulative_table_in_tsv() {
    let dir = feed_dir("cumulative");
    let out = run(&dir, &["--cumulative", "--format", "tsv"]);
    assert!(out.contains("date\tcumulative_cases\tcumulative_deaths\tcumulative_vaccinations"));
    assert!(out.contains("2021-01-01\t1205\t1\t0"));
    assert!(out.contains("2021-01-02\t1225\t3\t5"));
}

#[test]
fn export_writes_selected_region() {
    let dir = feed_dir("export");
    let target = dir.join("us.csv");
    let out = run(&dir, &["--region", "United States", "--export", target.to_str().unwrap()]);
    assert!(out.contains("Exported 1 rows"));

    let s = fs::read_to_string(target).unwrap();
    assert!(s.contains("United States,2021-01-01,5,0,"));
}

#[test]
fn unknown_region_is_noted_and_clamped() {
    let dir = feed_dir("unknown");
    let out = run(&dir, &["--region", "Atlantis"]);
    assert!(out.contains("Note: Region not in data: Atlantis"));
    assert!(out.contains("COVID-19 Overview for Canada"));
}
