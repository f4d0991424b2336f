// tests/store_cache.rs
//
// Cache behaviour of DatasetStore with a counting in-memory source.
//
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use covid_dash::progress::Progress;
use covid_dash::source::Source;
use covid_dash::store::DatasetStore;
use covid_dash::{Error, Result};

const BODY: &str = "\
location,date,new_cases,new_deaths
Canada,2021-01-01,3,0
Canada,2021-01-02,0,1
Chile,2021-01-01,7,2
";

#[derive(Default)]
struct Feed {
    calls: AtomicUsize,
    offline: AtomicBool,
    delay_ms: u64,
}

impl Source for Feed {
    fn fetch(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            thread::sleep(Duration::from_millis(self.delay_ms));
        }
        if self.offline.load(Ordering::SeqCst) {
            return Err(Error::unavailable("test feed", "connection refused"));
        }
        Ok(BODY.to_string())
    }
    fn describe(&self) -> String { "test feed".into() }
}

impl Feed {
    fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
}

#[derive(Default)]
struct Recorder {
    lines: Vec<String>,
    bytes: usize,
    finished: usize,
}

impl Progress for Recorder {
    fn log(&mut self, msg: &str) { self.lines.push(msg.to_string()); }
    fn fetched(&mut self, bytes: usize) { self.bytes = bytes; }
    fn finish(&mut self) { self.finished += 1; }
}

#[test]
fn fetches_once_until_invalidated() {
    let store = DatasetStore::new(Feed::default());

    let a = store.filtered().unwrap();
    let b = store.filtered().unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.len(), 2);
    assert_eq!(store.source().calls(), 1);

    store.invalidate();
    assert!(!store.is_loaded());
    let c = store.filtered().unwrap();
    assert!(!Arc::ptr_eq(&a, &c));
    assert_eq!(store.source().calls(), 2);
}

#[test]
fn dataset_and_filtered_come_from_one_fetch() {
    let store = DatasetStore::new(Feed::default());
    let raw = store.load().unwrap();
    let filtered = store.filtered().unwrap();
    assert_eq!(raw.len(), 3);
    assert_eq!(filtered.len(), 2);
    assert_eq!(store.source().calls(), 1);
}

#[test]
fn concurrent_cold_loads_share_one_fetch() {
    let store = Arc::new(DatasetStore::new(Feed { delay_ms: 50, ..Feed::default() }));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.filtered().map(|ds| ds.len()))
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap().unwrap(), 2);
    }
    assert_eq!(store.source().calls(), 1);
}

#[test]
fn failed_load_is_not_cached_and_retry_succeeds() {
    let store = DatasetStore::new(Feed::default());
    store.source().offline.store(true, Ordering::SeqCst);

    let err = store.load().unwrap_err();
    assert!(err.is_data_unavailable());
    assert!(!store.is_loaded());

    store.source().offline.store(false, Ordering::SeqCst);
    assert_eq!(store.load().unwrap().len(), 3);
    assert!(store.is_loaded());
    assert_eq!(store.source().calls(), 2);
}

#[test]
fn progress_sees_fetch_and_finish() {
    let store = DatasetStore::new(Feed::default());
    let mut rec = Recorder::default();

    store.snapshot(Some(&mut rec)).unwrap();
    assert_eq!(rec.bytes, BODY.len());
    assert_eq!(rec.finished, 1);
    assert!(rec.lines.iter().any(|l| l.starts_with("Fetching test feed")));

    // cache hit reports nothing
    let mut again = Recorder::default();
    store.snapshot(Some(&mut again)).unwrap();
    assert!(again.lines.is_empty());
    assert_eq!(again.finished, 0);
}
