// src/error.rs
//! Error types for the dashboard pipeline.
//!
//! Only loading and exporting can fail. Filtering, aggregation and rendering
//! are total over any dataset the loader hands out.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The feed could not be fetched or did not parse into a dataset.
    /// Fatal to the render that asked for it; never retried by the core.
    #[error("data unavailable from {origin}: {detail}")]
    DataUnavailable { origin: String, detail: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("export error: {0}")]
    Export(String),
}

impl Error {
    pub fn unavailable(origin: impl Into<String>, detail: impl ToString) -> Self {
        Error::DataUnavailable {
            origin: origin.into(),
            detail: detail.to_string(),
        }
    }

    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Error::DataUnavailable { .. })
    }
}
