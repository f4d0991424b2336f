// src/export.rs

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::options::ExportOptions;
use crate::error::{Error, Result};
use crate::table::TableData;

/// Write `table` to any writer using the export format and header policy.
pub fn write_table<W: Write>(w: W, table: &TableData, export: &ExportOptions) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(export.format.delim())
        .from_writer(w);

    if export.include_headers {
        wtr.write_record(&table.headers)?;
    }
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Same as `write_table`, into a String (Copy to clipboard, CLI stdout).
pub fn to_export_string(table: &TableData, export: &ExportOptions) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, table, export)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/// Write a single export file at `export.out_path()`; returns the path.
pub fn write_export(table: &TableData, export: &ExportOptions) -> Result<PathBuf> {
    if table.is_empty() {
        return Err(Error::Export("nothing to export".into()));
    }

    let path = export.out_path();
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    let file = File::create(&path)?;
    write_table(BufWriter::new(file), table, export)?;
    logf!("Export: wrote {} rows → {}", table.nrows(), path.display());
    Ok(path)
}

fn ensure_directory(dir: &Path) -> Result<()> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
