// src/progress.rs
/// Lightweight progress reporting used by the dataset load.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once the feed body has been received.
    fn fetched(&mut self, _bytes: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Writes status lines to stderr (CLI).
pub struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn fetched(&mut self, bytes: usize) {
        eprintln!("Received {:.1} MB", bytes as f64 / 1_048_576.0);
    }
}
