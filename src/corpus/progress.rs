// file: src/corpus/progress.rs
// description: progress tracking and statistics for corpus preloading
// reference: uses indicatif for progress bars and tracks indexing counts

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadStats {
    pub files_indexed: usize,
    pub files_failed: usize,
    pub bytes_indexed: u64,
    pub duration_ms: u64,
}

impl LoadStats {
    pub fn success_rate(&self) -> f64 {
        let total = self.files_indexed + self.files_failed;
        if total == 0 {
            return 0.0;
        }
        (self.files_indexed as f64 / total as f64) * 100.0
    }
}

pub struct IndexProgress {
    bar: ProgressBar,
    files_indexed: AtomicUsize,
    files_failed: AtomicUsize,
    bytes_indexed: AtomicU64,
    start_time: Instant,
}

impl IndexProgress {
    /// A hidden tracker still counts; it just draws nothing.
    pub fn new(total_files: usize, visible: bool, colored: bool) -> Self {
        let bar = if visible {
            create_progress_bar(total_files as u64, colored)
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            files_indexed: AtomicUsize::new(0),
            files_failed: AtomicUsize::new(0),
            bytes_indexed: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn inc_indexed(&self, bytes: u64) {
        self.files_indexed.fetch_add(1, Ordering::SeqCst);
        self.bytes_indexed.fetch_add(bytes, Ordering::SeqCst);
        self.bar.inc(1);
        self.update_message();
    }

    pub fn inc_failed(&self) {
        self.files_failed.fetch_add(1, Ordering::SeqCst);
        self.bar.inc(1);
        self.update_message();
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Corpus loaded");
    }

    pub fn get_stats(&self) -> LoadStats {
        LoadStats {
            files_indexed: self.files_indexed.load(Ordering::SeqCst),
            files_failed: self.files_failed.load(Ordering::SeqCst),
            bytes_indexed: self.bytes_indexed.load(Ordering::SeqCst),
            duration_ms: self.start_time.elapsed().as_millis() as u64,
        }
    }

    fn update_message(&self) {
        let message = format!(
            "Indexed: {} | Failed: {}",
            self.files_indexed.load(Ordering::SeqCst),
            self.files_failed.load(Ordering::SeqCst)
        );
        self.bar.set_message(message);
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
    };

    match ProgressStyle::default_bar().template(template) {
        Ok(style) => bar.set_style(style.progress_chars(if colored { "█▓▒░" } else { "=>-" })),
        Err(e) => tracing::warn!("Invalid progress template, using default: {}", e),
    }
    bar
}
