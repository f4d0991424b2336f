// src/cli.rs
use std::collections::BTreeSet;
use std::error::Error;
use std::io::{self, Write};

use crate::config::options::{ExportFormat, ExportOptions, SourceOptions};
use crate::config::state::Selection;
use crate::progress::{Progress, StderrProgress};
use crate::source::{self, Source};
use crate::store::DatasetStore;
use crate::view::{self, fmt_count, DashboardView};
use crate::{aggregate::Totals, data::Metric, export};

const HELP: &str = "\
Usage: cli [options]

  --region <name>         Region for the overview (default: Canada)
  --compare <a,b,...>     Regions for the comparison summary
  --url <url>             Fetch the feed from <url>
  --file <path>           Read the feed from a local CSV instead
  --list-regions          Print every region and exit
  --table                 Print the region's filtered rows
  --cumulative            Print the cumulative global table
  --export <path>         Write the region's filtered rows to <path>
  --format <csv|tsv>      Table/export format (default: csv)
  --no-headers            Omit the header line in tables/exports
  -h, --help              Show this help";

#[derive(Clone, Debug, Default)]
pub struct Params {
    pub source: SourceOptions,
    pub selection: Selection,
    pub export: ExportOptions,
    pub export_path: Option<String>,
    pub list_regions: bool,
    pub print_table: bool,
    pub print_cumulative: bool,
    pub help: bool,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(std::env::args().skip(1))?;
    if params.help {
        println!("{HELP}");
        return Ok(());
    }

    let store = DatasetStore::new(source::from_options(&params.source));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report(&store, &params, &mut out, Some(&mut StderrProgress))
}

pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--region" => {
                let v = args.next().ok_or("Missing value for --region")?;
                params.selection.region = Some(v.trim().to_string());
            }
            "--compare" => {
                let v = args.next().ok_or("Missing value for --compare")?;
                params.selection.compare = parse_list(&v);
            }
            "--url" => params.source = SourceOptions::url(args.next().ok_or("Missing URL")?),
            "--file" => params.source = SourceOptions::file(args.next().ok_or("Missing file path")?),
            "--list-regions" => params.list_regions = true,
            "--table" => params.print_table = true,
            "--cumulative" => params.print_cumulative = true,
            "--export" => params.export_path = Some(args.next().ok_or("Missing output path")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.export.format = ExportFormat::parse(&v)
                    .ok_or_else(|| format!("Unknown format: {v}"))?;
            }
            "--no-headers" => params.export.include_headers = false,
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }

    Ok(params)
}

fn parse_list(s: &str) -> BTreeSet<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load (through the store's cache), render, and print what `params` asks for.
pub fn report<S: Source, W: Write>(
    store: &DatasetStore<S>,
    params: &Params,
    out: &mut W,
    progress: Option<&mut dyn Progress>,
) -> Result<(), Box<dyn Error>> {
    let snap = store.snapshot(progress)?;
    let view = view::render(&snap.filtered, &params.selection);

    if params.list_regions {
        for r in &view.regions {
            writeln!(out, "{r}")?;
        }
        return Ok(());
    }

    for n in &view.notices {
        writeln!(out, "Note: {n}")?;
    }

    write_overview(out, &view)?;

    if params.print_cumulative {
        writeln!(out)?;
        write_cumulative(out, &view, &params.export)?;
    }

    if let Some(region) = &view.region {
        if params.print_table {
            writeln!(out)?;
            export::write_table(&mut *out, &region.table, &params.export)?;
        }
        if let Some(path) = &params.export_path {
            let mut opts = params.export.clone();
            opts.set_path(path);
            let written = export::write_export(&region.table, &opts)?;
            writeln!(out, "Exported {} rows → {}", region.table.nrows(), written.display())?;
        }
    }

    Ok(())
}

fn write_totals<W: Write>(out: &mut W, totals: &Totals, suffix: Option<&str>) -> io::Result<()> {
    for m in Metric::ALL {
        let title = match suffix {
            Some(s) => format!("Total {} in {}", m.label(), s),
            None => format!("Total {}", m.label()),
        };
        writeln!(out, "  {:<40} {:>16}", title, fmt_count(totals.get(m)))?;
    }
    Ok(())
}

fn write_overview<W: Write>(out: &mut W, view: &DashboardView) -> io::Result<()> {
    writeln!(out, "Global COVID-19 Overview")?;
    write_totals(out, &view.global, None)?;

    if let Some(region) = &view.region {
        writeln!(out)?;
        writeln!(out, "COVID-19 Overview for {}", region.name)?;
        write_totals(out, &region.totals, Some(&region.name))?;
        match (region.daily_cases.points.first(), region.daily_cases.points.last()) {
            (Some((first, _)), Some((last, _))) => writeln!(
                out,
                "  {} days with positive new cases, {} → {}",
                region.daily_cases.points.len(),
                first,
                last
            )?,
            _ => writeln!(out, "  no days with positive new cases")?,
        }
    }

    if !view.comparison.is_empty() {
        writeln!(out)?;
        writeln!(out, "Daily New Cases Comparison")?;
        for s in &view.comparison {
            if let Some((date, peak)) = s.points.iter().max_by_key(|(_, v)| *v) {
                writeln!(
                    out,
                    "  {:<32} peak {:>12} on {}",
                    s.label,
                    fmt_count(*peak),
                    date
                )?;
            }
        }
    }
    Ok(())
}

fn write_cumulative<W: Write>(
    out: &mut W,
    view: &DashboardView,
    export: &ExportOptions,
) -> crate::Result<()> {
    let table = crate::table::TableData::with(
        vec![
            "date".into(),
            "cumulative_cases".into(),
            "cumulative_deaths".into(),
            "cumulative_vaccinations".into(),
        ],
        view.cumulative
            .iter()
            .map(|p| {
                vec![
                    p.date.to_string(),
                    p.cases.to_string(),
                    p.deaths.to_string(),
                    p.vaccinations.to_string(),
                ]
            })
            .collect(),
    );
    export::write_table(out, &table, export)
}
