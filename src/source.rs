// src/source.rs
//! Where the raw feed text comes from.
//!
//! `HttpSource` is the production path; `FileSource` reads a local copy of the
//! same CSV (CLI `--file`, offline work). Tests plug in their own `Source` to
//! count fetches.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::options::{SourceKind, SourceOptions};
use crate::core::net;
use crate::error::{Error, Result};

pub trait Source: Send + Sync {
    /// Retrieve the whole CSV payload.
    fn fetch(&self) -> Result<String>;

    /// Human-readable origin, used in logs and error messages.
    fn describe(&self) -> String;
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn fetch(&self) -> Result<String> { (**self).fetch() }
    fn describe(&self) -> String { (**self).describe() }
}

#[derive(Clone, Debug)]
pub struct HttpSource {
    pub url: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Source for HttpSource {
    fn fetch(&self) -> Result<String> {
        net::http_get(&self.url, self.connect_timeout, self.read_timeout)
    }
    fn describe(&self) -> String { self.url.clone() }
}

#[derive(Clone, Debug)]
pub struct FileSource {
    pub path: PathBuf,
}

impl Source for FileSource {
    fn fetch(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| Error::unavailable(self.describe(), e))
    }
    fn describe(&self) -> String { self.path.display().to_string() }
}

pub fn from_options(opts: &SourceOptions) -> Box<dyn Source> {
    match &opts.kind {
        SourceKind::Http(url) => Box::new(HttpSource {
            url: url.clone(),
            connect_timeout: opts.connect_timeout,
            read_timeout: opts.read_timeout,
        }),
        SourceKind::File(path) => Box::new(FileSource { path: path.clone() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_data_unavailable() {
        let src = from_options(&SourceOptions::file("definitely/not/here.csv"));
        let err = src.fetch().unwrap_err();
        assert!(err.is_data_unavailable());
        assert!(err.to_string().contains("definitely"));
    }
}
