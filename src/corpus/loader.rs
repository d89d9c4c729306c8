// file: src/corpus/loader.rs
// description: concurrent corpus reading and indexing into the document store
// reference: stream-based bounded concurrency with futures

use crate::config::CorpusConfig;
use crate::corpus::markdown::strip_markdown;
use crate::corpus::progress::{IndexProgress, LoadStats};
use crate::corpus::scanner::{CorpusFile, CorpusScanner};
use crate::error::{NlpError, Result};
use crate::models::IndexRequest;
use crate::service::NlpService;
use futures::stream::{self, StreamExt};
use std::path::Path;
use tracing::{error, info, warn};

pub struct CorpusLoader {
    scanner: CorpusScanner,
    parallel_workers: usize,
    show_progress: bool,
    colored: bool,
}

impl CorpusLoader {
    pub fn new(config: CorpusConfig) -> Self {
        Self {
            parallel_workers: config.parallel_workers.max(1),
            scanner: CorpusScanner::new(config),
            show_progress: false,
            colored: false,
        }
    }

    pub fn with_progress(mut self, colored: bool) -> Self {
        self.show_progress = true;
        self.colored = colored;
        self
    }

    /// Indexes every corpus file under `root`, using the relative path as id.
    ///
    /// Files are read concurrently but indexed in path order, so a reload of
    /// the same directory produces the same store order.
    pub async fn load_directory(&self, service: &NlpService, root: &Path) -> Result<LoadStats> {
        let files = self.scanner.scan_directory(root)?;
        let progress = IndexProgress::new(files.len(), self.show_progress, self.colored);

        let results = stream::iter(files.into_iter().map(|file| async move {
            let request = read_request(&file).await;
            (file, request)
        }))
        .buffered(self.parallel_workers)
        .collect::<Vec<_>>()
        .await;

        for (file, request) in results {
            match request.and_then(|request| service.index_document(request)) {
                Ok(_) => progress.inc_indexed(file.size),
                Err(e @ NlpError::Storage(_)) => {
                    error!("Failed to index {}: {}", file.relative_path, e);
                    progress.inc_failed();
                }
                Err(e) => {
                    warn!("Skipping {}: {}", file.relative_path, e);
                    progress.inc_failed();
                }
            }
        }

        progress.finish();
        let stats = progress.get_stats();
        info!(
            "Loaded {} documents from {} ({} failed, {} ms)",
            stats.files_indexed,
            root.display(),
            stats.files_failed,
            stats.duration_ms
        );

        Ok(stats)
    }
}

async fn read_request(file: &CorpusFile) -> Result<IndexRequest> {
    let content = tokio::fs::read_to_string(&file.path)
        .await
        .map_err(|source| NlpError::Corpus {
            path: file.path.clone(),
            source,
        })?;

    let is_markdown = file
        .path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"));

    let (text, heading) = if is_markdown {
        let parsed = strip_markdown(&content);
        (parsed.plain_text, parsed.title)
    } else {
        (content.trim().to_string(), None)
    };

    let title = heading.or_else(|| {
        file.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
    });

    let mut request = IndexRequest::new(file.relative_path.clone(), text);
    request.title = title;
    Ok(request)
}
