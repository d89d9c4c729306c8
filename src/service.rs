// file: src/service.rs
// description: service facade owning the document store and exposing the core operations
// reference: application service layer

use crate::config::Config;
use crate::error::{NlpError, Result};
use crate::extractor::ActionExtractor;
use crate::index::DocumentStore;
use crate::models::{ActionRecord, DocumentRecord, IndexAck, IndexRequest, SearchHit, StoreStats};
use crate::search::{EmbedOutcome, SearchOutcome, SimilaritySearch};
use std::sync::RwLock;
use tracing::{debug, info};

pub const MODEL_NAME: &str = "TF-IDF + lexicon POS tagger";

/// Entry point for the transport layer.
///
/// Each instance owns its own document collection; nothing is shared between
/// instances and nothing survives the instance.
pub struct NlpService {
    config: Config,
    extractor: ActionExtractor,
    search: SimilaritySearch,
    store: RwLock<DocumentStore>,
}

impl NlpService {
    pub fn new(config: Config) -> Self {
        Self {
            extractor: ActionExtractor::new(config.extraction.clone()),
            search: SimilaritySearch::new(config.search.clone()),
            store: RwLock::new(DocumentStore::new()),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn extract_actions(&self, text: &str) -> Vec<ActionRecord> {
        self.extractor.extract(text)
    }

    pub fn index_document(&self, request: IndexRequest) -> Result<IndexAck> {
        let record = DocumentRecord::from_request(
            request,
            &self.config.search.default_title,
            self.config.search.excerpt_chars,
        );
        let id = record.id.clone();

        let mut store = self
            .store
            .write()
            .map_err(|e| NlpError::Storage(format!("failed to lock document store: {}", e)))?;

        let replaced = store.upsert(record);
        info!(
            "Indexed document {} ({}; {} total)",
            id,
            if replaced { "replaced" } else { "new" },
            store.len()
        );

        Ok(IndexAck { success: true, id })
    }

    pub fn try_search(&self, query: &str, top_k: Option<usize>) -> SearchOutcome {
        let top_k = top_k.unwrap_or(self.config.search.default_top_k);

        match self.store.read() {
            Ok(store) => {
                debug!("Searching {} documents (top_k = {})", store.len(), top_k);
                self.search.search(store.documents(), query, top_k)
            }
            Err(e) => SearchOutcome::Degraded {
                reason: format!("failed to lock document store: {}", e),
            },
        }
    }

    /// Ranked hits, or an empty list when the store is empty or search fails.
    pub fn search_documents(&self, query: &str, top_k: Option<usize>) -> Vec<SearchHit> {
        self.try_search(query, top_k).into_hits()
    }

    pub fn try_embed(&self, text: &str) -> EmbedOutcome {
        match self.store.read() {
            Ok(store) => self.search.embed(store.documents(), text),
            Err(e) => EmbedOutcome::Degraded {
                reason: format!("failed to lock document store: {}", e),
            },
        }
    }

    /// Always `embedding_dim` values long; all zeros when nothing can be computed.
    pub fn embed(&self, text: &str) -> Vec<f64> {
        self.try_embed(text).into_vector(self.search.embedding_dim())
    }

    pub fn stats(&self) -> Result<StoreStats> {
        let store = self
            .store
            .read()
            .map_err(|e| NlpError::Storage(format!("failed to lock document store: {}", e)))?;

        Ok(StoreStats {
            status: "ok".to_string(),
            docs_indexed: store.len(),
            model: MODEL_NAME.to_string(),
        })
    }
}

impl Default for NlpService {
    fn default() -> Self {
        Self::new(Config::default_config())
    }
}
