// src/store.rs
//! Process-wide, in-memory cache of the loaded feed.
//!
//! One `DatasetStore` is shared (behind an `Arc`) by every consumer. The first
//! `load()` fetches, parses and filters; later calls hand back the same `Arc`s
//! until `invalidate()`. The fetch runs while holding the cache lock, so
//! simultaneous cold starts wait for a single fetch instead of racing.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::data::{self, Dataset};
use crate::error::Result;
use crate::filter::{filter_positive_cases, FilteredDataset};
use crate::progress::Progress;
use crate::source::Source;

/// The cached pair. Both halves come from the same fetch.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub dataset: Arc<Dataset>,
    pub filtered: Arc<FilteredDataset>,
}

pub struct DatasetStore<S: Source> {
    source: S,
    cache: Mutex<Option<Snapshot>>,
}

impl<S: Source> DatasetStore<S> {
    pub fn new(source: S) -> Self {
        Self { source, cache: Mutex::new(None) }
    }

    pub fn source(&self) -> &S { &self.source }

    pub fn load(&self) -> Result<Arc<Dataset>> {
        self.snapshot(None).map(|s| s.dataset)
    }

    pub fn filtered(&self) -> Result<Arc<FilteredDataset>> {
        self.snapshot(None).map(|s| s.filtered)
    }

    /// Cached snapshot, fetching on a cold cache. A failed load leaves the
    /// cache empty and returns `DataUnavailable`; nothing is retried here.
    pub fn snapshot(&self, progress: Option<&mut dyn Progress>) -> Result<Snapshot> {
        let mut guard = self.lock();
        if let Some(snap) = guard.as_ref() {
            logd!("Cache: hit ({} rows)", snap.dataset.len());
            return Ok(snap.clone());
        }

        let origin = self.source.describe();
        let mut progress = progress;

        logf!("Load: fetching {}", origin);
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {origin} …"));
        }

        let result = self.source.fetch().and_then(|text| {
            if let Some(p) = progress.as_deref_mut() {
                p.fetched(text.len());
                p.log("Parsing …");
            }
            data::parse_csv(&text, &origin)
        });

        let snap = match result {
            Ok(ds) => {
                let filtered = filter_positive_cases(&ds);
                Snapshot { dataset: Arc::new(ds), filtered: Arc::new(filtered) }
            }
            Err(e) => {
                loge!("Load: {}", e);
                if let Some(p) = progress.as_deref_mut() {
                    p.finish();
                }
                return Err(e);
            }
        };

        logf!(
            "Load: OK rows={} skipped={} filtered={}",
            snap.dataset.len(),
            snap.dataset.skipped(),
            snap.filtered.len()
        );
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Loaded {} rows", snap.filtered.len()));
            p.finish();
        }

        *guard = Some(snap.clone());
        Ok(snap)
    }

    /// Drop the cache; the next load fetches again.
    pub fn invalidate(&self) {
        if self.lock().take().is_some() {
            logf!("Cache: invalidated");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Snapshot>> {
        // A panic mid-load never stores a half-built snapshot.
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }
}
