// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub export: ExportOptions,
}

/// Where the feed comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Http(String),
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub kind: SourceKind,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            kind: SourceKind::Http(DATA_URL.to_string()),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(READ_TIMEOUT_SECS),
        }
    }
}

impl SourceOptions {
    pub fn url(url: impl Into<String>) -> Self {
        Self { kind: SourceKind::Http(url.into()), ..Self::default() }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self { kind: SourceKind::File(path.into()), ..Self::default() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension follows the format unless the
    /// user typed one explicitly.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = match &self.out_path.user_ext {
            Some(ext) => ext.to_string_lossy().into_owned(),
            None => self.format.ext().to_string(),
        };
        path.push(format!("{stem}.{ext}"));
        path
    }

    /// Parse GUI/CLI text into dir + stem (+ explicit extension, if any).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        self.out_path.dir = p
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.user_ext = p.extension().map(|e| e.to_os_string());
    }

    /// Default file name for one region's table, e.g. `out/United_States.csv`.
    pub fn set_region_stem(&mut self, region: &str) {
        self.out_path.file_stem = OsString::from(sanitize_filename(region));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    user_ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            user_ext: None,
        }
    }
}

/// Region names → safe file stems ("Bonaire Sint Eustatius and Saba" →
/// "Bonaire_Sint_Eustatius_and_Saba").
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' {
            out.push(ch);
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { DEFAULT_FILE.to_string() } else { out }
}
