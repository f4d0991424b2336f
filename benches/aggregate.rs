// benches/aggregate.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use covid_dash::{aggregate, config::state::Selection, data, filter, view};

/// ~200 regions × 3 years of daily rows, roughly the live feed's shape.
fn synthetic_feed() -> String {
    let start = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let mut s = String::from("iso_code,location,date,new_cases,new_deaths,new_vaccinations\n");
    for r in 0..200u32 {
        for day in 0..1_100u32 {
            let date = start + chrono::Days::new(day as u64);
            let cases = (r * 7 + day * 13) % 97;
            let vacc = if day > 350 { (day * 31 % 500).to_string() } else { String::new() };
            s.push_str(&format!("R{r:03},Region {r:03},{date},{cases},{},{vacc}\n", cases / 10));
        }
    }
    s
}

fn bench_pipeline(c: &mut Criterion) {
    let text = synthetic_feed();
    let ds = data::parse_csv(&text, "bench").unwrap();
    let filtered = filter::filter_positive_cases(&ds);
    let selection = Selection::new("Region 042", ["Region 001".to_string(), "Region 150".to_string()]);

    c.bench_function("parse_csv", |b| {
        b.iter(|| black_box(data::parse_csv(black_box(&text), "bench").unwrap().len()))
    });

    c.bench_function("filter_positive_cases", |b| {
        b.iter(|| black_box(filter::filter_positive_cases(black_box(&ds)).len()))
    });

    c.bench_function("cumulative_global", |b| {
        b.iter(|| black_box(aggregate::cumulative_global(black_box(&filtered)).len()))
    });

    c.bench_function("render", |b| {
        b.iter(|| black_box(view::render(black_box(&filtered), &selection).regions.len()))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
